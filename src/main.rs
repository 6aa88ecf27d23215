use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::SpotifyClient;
use crate::services::playlists::PlaylistService;
use crate::services::ranking_service::RankingService;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.args.log_level))
        .init();

    let spotify = SpotifyClient::authenticate(
        config.http_client.clone(),
        &config.args.client_id,
        &config.args.client_secret,
    )
    .await?;

    let playlists = PlaylistService::new(spotify);
    let service = RankingService::new(config, playlists);
    service.run().await?;

    info!("All-time ranking completed successfully!");
    Ok(())
}

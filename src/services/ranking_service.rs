use crate::config::Config;
use crate::error::Result;
use crate::services::aggregation::aggregate;
use crate::services::output;
use crate::services::playlists::PlaylistService;
use tracing::info;

pub struct RankingService {
    config: Config,
    playlists: PlaylistService,
}

impl RankingService {
    pub fn new(config: Config, playlists: PlaylistService) -> Self {
        Self { config, playlists }
    }

    pub async fn run(&self) -> Result<()> {
        info!("Starting all-time ranking pipeline");

        let records = self
            .playlists
            .fetch_wrapped_records(&self.config.args.user)
            .await?;
        info!("Fetched {} track appearances", records.len());

        let ranking = aggregate(&records)?;
        info!("Aggregated {} distinct tracks", ranking.len());

        match &self.config.args.find {
            Some(name) => match output::render_find(&ranking, name) {
                Some(line) => println!("{line}"),
                None => println!("'{name}' is not in the all-time ranking"),
            },
            None => {
                for line in output::render_top(&ranking, self.config.args.top) {
                    println!("{line}");
                }
            }
        }

        Ok(())
    }
}

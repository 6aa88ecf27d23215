use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Spotify username whose Wrapped playlists to rank
    #[arg(short, long)]
    pub user: String,

    /// Number of top tracks to show
    #[arg(short, long, default_value_t = 10)]
    pub top: i64,

    /// Look up a single track by name instead of listing the top
    #[arg(long)]
    pub find: Option<String>,

    /// Spotify API client id
    #[clap(long, env = "SPOTIFY_CLIENT_ID")]
    pub client_id: String,

    /// Spotify API client secret
    #[clap(long, env = "SPOTIFY_CLIENT_SECRET")]
    pub client_secret: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

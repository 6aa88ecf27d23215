use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Rank {rank} is outside the valid range [1, 100]")]
    InvalidRank { rank: u32 },
    #[error("Year {year} falls outside the playlist range [{min_year}, {max_year}]")]
    InvalidYear {
        year: i32,
        min_year: i32,
        max_year: i32,
    },
    #[error("Year range [{min_year}, {max_year}] spans no years")]
    DegenerateRange { min_year: i32, max_year: i32 },
    #[error("No tracks were supplied, nothing to rank")]
    EmptyInput,
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;

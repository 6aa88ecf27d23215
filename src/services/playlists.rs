use crate::domain::TrackRecord;
use crate::error::{Result, TrackError};
use crate::infrastructure::SpotifyClient;
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::OnceCell;
use regex::Regex;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Wrapped playlists are named "Your Top Songs <year>".
const WRAPPED_MARKER: &str = "Top Songs";

pub struct PlaylistService {
    spotify: SpotifyClient,
}

impl PlaylistService {
    pub fn new(spotify: SpotifyClient) -> Self {
        info!("Created new Playlist service");
        Self { spotify }
    }

    /// Collects every track appearance across the user's yearly Wrapped
    /// playlists, in list order per playlist so the 1-based position is
    /// the track's rank for that year.
    pub async fn fetch_wrapped_records(&self, username: &str) -> Result<Vec<TrackRecord>> {
        let playlists = self.spotify.user_playlists(username).await?;
        let wrapped: Vec<_> = playlists
            .into_iter()
            .filter(|playlist| is_wrapped_playlist(&playlist.name))
            .collect();

        info!(
            "Found {} Wrapped playlists for {username}",
            wrapped.len()
        );

        let pb = ProgressBar::new(wrapped.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| TrackError::Other(e.to_string()))?,
        );

        let mut records = Vec::new();
        for playlist in &wrapped {
            let year = playlist_year(&playlist.name)?;
            pb.set_message(format!("Fetching {}", playlist.name));

            let tracks = self.spotify.playlist_tracks(&playlist.id).await?;
            for (position, track) in tracks.into_iter().enumerate() {
                match track.id {
                    Some(id) => {
                        records.push(TrackRecord::new(id, track.name, year, (position + 1) as u32))
                    }
                    // Local files carry no id and cannot be merged across years.
                    None => warn!(
                        "Track '{}' in '{}' has no id, skipping",
                        track.name, playlist.name
                    ),
                }
            }

            pb.inc(1);
            sleep(Duration::from_millis(250)).await; // Rate limiting
        }
        pb.finish_with_message("Done fetching playlists!");

        Ok(records)
    }
}

fn is_wrapped_playlist(name: &str) -> bool {
    name.contains(WRAPPED_MARKER)
}

fn playlist_year(name: &str) -> Result<i32> {
    static YEAR_PATTERN: OnceCell<Regex> = OnceCell::new();
    let year_re = YEAR_PATTERN.get_or_init(|| Regex::new(r"(\d{4})\s*$").unwrap());

    year_re
        .captures(name)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| TrackError::Parse(format!("Playlist name '{name}' has no trailing year")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_wrapped_playlists_by_name() {
        assert!(is_wrapped_playlist("Your Top Songs 2021"));
        assert!(is_wrapped_playlist("Top Songs 2019"));
        assert!(!is_wrapped_playlist("Discover Weekly"));
        assert!(!is_wrapped_playlist("Wrapped 2021"));
    }

    #[test]
    fn extracts_trailing_year() {
        assert_eq!(playlist_year("Your Top Songs 2021").unwrap(), 2021);
        assert_eq!(playlist_year("Top Songs 2018 ").unwrap(), 2018);
    }

    #[test]
    fn name_without_year_is_a_parse_error() {
        let err = playlist_year("Your Top Songs").unwrap_err();
        assert!(matches!(err, TrackError::Parse(_)));
    }

    #[test]
    fn year_must_be_at_the_end_of_the_name() {
        assert!(playlist_year("2021 favourites").is_err());
    }
}

use crate::error::{Result, TrackError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{error, info};

const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE: &str = "https://api.spotify.com/v1";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistsPage {
    pub items: Vec<PlaylistSummary>,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistTrackEntry {
    pub track: Option<TrackObject>,
}

/// `id` is null for local files on the wire, callers decide how to handle
/// those.
#[derive(Debug, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TracksPage {
    pub items: Vec<PlaylistTrackEntry>,
    pub next: Option<String>,
}

pub struct SpotifyClient {
    client: Client,
    token: String,
}

impl SpotifyClient {
    /// Exchanges client credentials for an API token.
    pub async fn authenticate(client: Client, client_id: &str, client_secret: &str) -> Result<Self> {
        let response = client
            .post(ACCOUNTS_TOKEN_URL)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TrackError::Auth(format!(
                "Token request failed with status {}",
                response.status()
            )));
        }

        let token: TokenResponse = response.json().await?;
        info!("Authenticated against the Spotify API");

        Ok(Self {
            client,
            token: token.access_token,
        })
    }

    /// Every playlist owned or followed by the user, following the `next`
    /// cursor until the listing is exhausted.
    pub async fn user_playlists(&self, username: &str) -> Result<Vec<PlaylistSummary>> {
        let mut playlists = Vec::new();
        let mut url = Some(format!("{API_BASE}/users/{username}/playlists?limit=50"));

        while let Some(current) = url {
            let page: PlaylistsPage = self.get_json(&current).await?;
            playlists.extend(page.items);
            url = page.next;
        }

        Ok(playlists)
    }

    /// All track entries of one playlist in list order, paginated the same
    /// way as the playlist listing.
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<TrackObject>> {
        let mut tracks = Vec::new();
        let mut url = Some(format!("{API_BASE}/playlists/{playlist_id}/tracks?limit=100"));

        while let Some(current) = url {
            let page: TracksPage = self.get_json(&current).await?;
            tracks.extend(page.items.into_iter().filter_map(|entry| entry.track));
            url = page.next;
        }

        Ok(tracks)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            error!("Spotify API error: Status {}", response.status());
            return Err(TrackError::Other(format!(
                "Spotify API returned status {} for {url}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_playlist_page_with_next_cursor() {
        let body = r#"{
            "items": [
                {"id": "37i9dQZF1Et", "name": "Your Top Songs 2021", "owner": {"id": "spotify"}},
                {"id": "5FJXhjqY3yz", "name": "Road Trip"}
            ],
            "next": "https://api.spotify.com/v1/users/u/playlists?offset=50&limit=50",
            "total": 83
        }"#;

        let page: PlaylistsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Your Top Songs 2021");
        assert!(page.next.is_some());
    }

    #[test]
    fn deserializes_final_tracks_page() {
        let body = r#"{
            "items": [
                {"track": {"id": "11dFghVXANMlKmJXsNCbNl", "name": "Cut To The Feeling", "duration_ms": 207959}},
                {"track": {"id": null, "name": "local recording"}},
                {"track": null}
            ],
            "next": null
        }"#;

        let page: TracksPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 3);
        assert!(page.next.is_none());

        let first = page.items[0].track.as_ref().unwrap();
        assert_eq!(first.id.as_deref(), Some("11dFghVXANMlKmJXsNCbNl"));
        assert!(page.items[1].track.as_ref().unwrap().id.is_none());
        assert!(page.items[2].track.is_none());
    }
}

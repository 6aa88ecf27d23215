mod clients;

pub use clients::spotify::{PlaylistSummary, SpotifyClient, TrackObject};

use serde::{Deserialize, Serialize};

/// One track's appearance on one yearly "Top Songs" playlist.
///
/// `rank` is the 1-based position within that year's list, 1 being the
/// best-ranked track of the year. The same track id can appear in several
/// years; each appearance is a separate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub rank: u32,
}

impl TrackRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, year: i32, rank: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year,
            rank,
        }
    }
}

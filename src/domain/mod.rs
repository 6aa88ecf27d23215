mod ranking;
mod track;

pub use ranking::{RankedTrack, Ranking};
pub use track::TrackRecord;

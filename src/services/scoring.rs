use crate::domain::TrackRecord;
use crate::error::{Result, TrackError};

/// Scores one playlist appearance against the year range covered by the
/// whole playlist set.
///
/// The rank component is `101 - rank`, so rank 1 is worth 100 points and
/// rank 100 is worth 1. Ranks outside [1, 100] would flip the meaning of
/// the score and are rejected instead of clamped.
///
/// Recency weighting is linear over the range:
/// e.g. for [2018, 2022], 5 years => 0.20 weight per year
///
/// 2022 playlist has 1.00x weight
/// 2021 playlist has 0.80x (4 x 0.20) weight
/// 2020 playlist has 0.60x (3 x 0.20) weight
/// 2019 playlist has 0.40x (2 x 0.20) weight
/// 2018 playlist has 0.20x (1 x 0.20) weight
pub fn score_track(record: &TrackRecord, min_year: i32, max_year: i32) -> Result<f64> {
    if record.rank < 1 || record.rank > 100 {
        return Err(TrackError::InvalidRank { rank: record.rank });
    }
    let rank_score = f64::from(101 - record.rank);

    let span = max_year - min_year + 1;
    if span <= 0 {
        return Err(TrackError::DegenerateRange { min_year, max_year });
    }

    // A year outside the discovered range is a caller bug; it would push
    // the multiplier out of (0, 1] and invert or zero the score.
    if record.year < min_year || record.year > max_year {
        return Err(TrackError::InvalidYear {
            year: record.year,
            min_year,
            max_year,
        });
    }

    let weight_per_year = 1.0 / f64::from(span);
    let year_multiplier = f64::from(record.year - min_year + 1) * weight_per_year;

    Ok(rank_score * year_multiplier)
}

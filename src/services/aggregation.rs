use crate::domain::{RankedTrack, Ranking, TrackRecord};
use crate::error::{Result, TrackError};
use crate::services::scoring::score_track;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Merges every yearly appearance into one all-time ranking.
///
/// Single pass to discover the year range, one score per record, then a
/// merge keyed by track id. Identities keep their first-seen order so the
/// final stable sort is deterministic for equal scores. Every summed score
/// is divided by the number of years the playlist set spans; combined with
/// the per-record recency weight this double-normalization is the intended
/// behavior of the formula, not an accident to correct.
///
/// Fail-fast: one malformed record aborts the whole computation. Skipping
/// it instead would silently misrepresent the ranking.
pub fn aggregate(records: &[TrackRecord]) -> Result<Ranking> {
    let (min_year, max_year) = discover_year_range(records)?;
    debug!("Discovered playlist year range [{min_year}, {max_year}]");

    let mut entries: Vec<RankedTrack> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for record in records {
        let score = score_track(record, min_year, max_year)?;

        match index_by_id.get(record.id.as_str()) {
            Some(&index) => {
                let entry = &mut entries[index];
                entry.total_score += score;
                // Same id, diverging names: last write wins. The source data
                // is assumed consistent, so this stays permissive.
                entry.name = record.name.clone();
            }
            None => {
                index_by_id.insert(record.id.clone(), entries.len());
                entries.push(RankedTrack {
                    id: record.id.clone(),
                    name: record.name.clone(),
                    total_score: score,
                });
            }
        }
    }

    let span = f64::from(max_year - min_year + 1);
    for entry in &mut entries {
        entry.total_score /= span;
    }

    // sort_by is stable, ties keep first-seen order.
    entries.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });

    Ok(Ranking::new(entries))
}

fn discover_year_range(records: &[TrackRecord]) -> Result<(i32, i32)> {
    let mut years = records.iter().map(|record| record.year);
    let first = years.next().ok_or(TrackError::EmptyInput)?;
    Ok(years.fold((first, first), |(min, max), year| {
        (min.min(year), max.max(year))
    }))
}

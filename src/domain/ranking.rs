use serde::{Deserialize, Serialize};

/// One entry of the finished all-time ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTrack {
    pub id: String,
    pub name: String,
    pub total_score: f64,
}

/// The aggregated all-time ranking, sorted by `total_score` descending.
///
/// Produced once by the aggregation service and read-only afterwards; the
/// query methods never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<RankedTrack>,
}

impl Ranking {
    pub(crate) fn new(entries: Vec<RankedTrack>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RankedTrack] {
        &self.entries
    }

    /// Returns the first `n` entries, or fewer if the ranking is shorter.
    /// A non-positive `n` yields an empty slice rather than an error.
    pub fn top(&self, n: i64) -> &[RankedTrack] {
        if n <= 0 {
            return &[];
        }
        let n = usize::try_from(n).unwrap_or(usize::MAX).min(self.entries.len());
        &self.entries[..n]
    }

    /// Linear scan for the first entry whose name matches exactly, paired
    /// with its 1-based position. Absence is a normal outcome, not an error.
    pub fn find(&self, name: &str) -> Option<(usize, &RankedTrack)> {
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| (index + 1, &self.entries[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ranking() -> Ranking {
        Ranking::new(vec![
            RankedTrack {
                id: "a".to_string(),
                name: "First".to_string(),
                total_score: 90.0,
            },
            RankedTrack {
                id: "b".to_string(),
                name: "Second".to_string(),
                total_score: 45.5,
            },
            RankedTrack {
                id: "c".to_string(),
                name: "Third".to_string(),
                total_score: 12.25,
            },
        ])
    }

    #[test]
    fn top_returns_first_n_entries() {
        let ranking = sample_ranking();
        let top = ranking.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "First");
        assert_eq!(top[1].name, "Second");
    }

    #[test]
    fn top_is_capped_at_ranking_length() {
        let ranking = sample_ranking();
        assert_eq!(ranking.top(10).len(), 3);
    }

    #[test]
    fn top_with_non_positive_n_is_empty() {
        let ranking = sample_ranking();
        assert!(ranking.top(0).is_empty());
        assert!(ranking.top(-5).is_empty());
    }

    #[test]
    fn find_returns_one_based_position() {
        let ranking = sample_ranking();
        let (position, entry) = ranking.find("Second").expect("entry should exist");
        assert_eq!(position, 2);
        assert_eq!(entry.id, "b");
    }

    #[test]
    fn find_misses_are_not_errors() {
        let ranking = sample_ranking();
        assert!(ranking.find("Nonexistent").is_none());
    }

    #[test]
    fn find_matches_exactly_not_by_substring() {
        let ranking = sample_ranking();
        assert!(ranking.find("Fir").is_none());
    }
}

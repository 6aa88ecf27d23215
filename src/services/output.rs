use crate::domain::{RankedTrack, Ranking};

pub fn format_entry(position: usize, entry: &RankedTrack) -> String {
    format!("{}. {} - {:.2}", position, entry.name, entry.total_score)
}

pub fn render_top(ranking: &Ranking, n: i64) -> Vec<String> {
    ranking
        .top(n)
        .iter()
        .enumerate()
        .map(|(index, entry)| format_entry(index + 1, entry))
        .collect()
}

pub fn render_find(ranking: &Ranking, name: &str) -> Option<String> {
    ranking
        .find(name)
        .map(|(position, entry)| format_entry(position, entry))
}

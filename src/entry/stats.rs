use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use super::types::{Category, Entry, Source};

/// Collection statistics for the home screen and `momento stats`.
#[derive(Debug, Serialize)]
pub struct EntryStats {
    pub total: usize,
    pub favorites: usize,
    /// Every category in declaration order, including zero counts.
    pub by_category: Vec<(Category, usize)>,
    /// Every source in declaration order, including zero counts.
    pub by_source: Vec<(Source, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest: Option<DateTime<Utc>>,
}

/// Compute statistics over `entries`.
pub fn entry_stats(entries: &[Entry]) -> EntryStats {
    EntryStats {
        total: entries.len(),
        favorites: entries.iter().filter(|e| e.is_favorite).count(),
        by_category: count_by_category(entries),
        by_source: count_by_source(entries),
        oldest: entries.iter().map(|e| e.created_at).min(),
        newest: entries.iter().map(|e| e.created_at).max(),
    }
}

pub fn count_by_category(entries: &[Entry]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&c| (c, entries.iter().filter(|e| e.category == c).count()))
        .collect()
}

pub fn count_by_source(entries: &[Entry]) -> Vec<(Source, usize)> {
    Source::ALL
        .iter()
        .map(|&s| (s, entries.iter().filter(|e| e.source == s).count()))
        .collect()
}

/// First element with the highest count; earlier elements win ties.
///
/// Returns `None` when every count is zero.
pub fn top<T: Copy>(counts: &[(T, usize)]) -> Option<(T, usize)> {
    counts
        .iter()
        .copied()
        .fold(None, |best, (item, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ if n == 0 => best,
            _ => Some((item, n)),
        })
}

/// "Today's wisdom": a pick that stays the same for a whole calendar day.
pub fn daily_pick(entries: &[Entry], day: NaiveDate) -> Option<&Entry> {
    if entries.is_empty() {
        return None;
    }
    let days = i64::from(day.num_days_from_ce());
    let index = days.rem_euclid(entries.len() as i64) as usize;
    entries.get(index)
}

//! Frequency aggregation over parsed entries.

use crate::entry::JournalEntry;
use crate::error::Error;
use crate::rasa::Rasa;
use chrono::Datelike;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Aggregated view of one period's entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Entry counts in ascending rasa id order; only recorded rasas appear.
    pub counts: Vec<(Rasa, usize)>,
    /// Total number of entries behind the counts.
    pub total: usize,
    /// The most frequent rasa. Ties resolve to the lowest catalog id.
    pub dominant: Rasa,
    /// One entry per day of month. When a day was recorded more than once,
    /// the entry appended first keeps it; later ones are shadowed. This is
    /// what the calendar draws from, so feed it one period's entries.
    pub entries_by_day: BTreeMap<u32, JournalEntry>,
}

/// Counts how often each rasa appears, names the dominant one, and keeps
/// the first entry of every recorded day.
///
/// Returns [`Error::EmptyPeriod`] when there is nothing to count, so
/// callers never have to invent a dominant mood for an empty month.
pub fn summarize(entries: &[JournalEntry]) -> Result<Summary, Error> {
    if entries.is_empty() {
        return Err(Error::EmptyPeriod);
    }
    let mut counts: BTreeMap<Rasa, usize> = BTreeMap::new();
    let mut entries_by_day: BTreeMap<u32, JournalEntry> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.rasa).or_insert(0) += 1;
        entries_by_day
            .entry(entry.date.day())
            .or_insert_with(|| entry.clone());
    }
    let dominant = counts
        .iter()
        .max_by_key(|(rasa, count)| (**count, Reverse(rasa.id())))
        .map(|(rasa, _)| *rasa)
        .expect("counts are never empty for a non-empty slice");
    Ok(Summary {
        counts: counts.into_iter().collect(),
        total: entries.len(),
        dominant,
        entries_by_day,
    })
}

//! Maps a month of recorded days onto a day-by-day color grid.

use crate::entry::JournalEntry;
use crate::error::Error;
use crate::rasa::Rasa;
use chrono::{Months, NaiveDate};
use std::collections::BTreeMap;

/// Color shown for days without an entry.
pub const EMPTY_COLOR: &str = "white";

/// One day of the mood calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Day of month, starting at 1.
    pub day: u32,
    /// The rasa recorded on that day, if any.
    pub rasa: Option<Rasa>,
    /// The rasa's color, or [`EMPTY_COLOR`] for an unrecorded day.
    pub color: &'static str,
}

/// Builds one cell per calendar day of the given month, in day order.
///
/// Every day of the month gets a cell whether or not it was recorded, so
/// the grid length is the month's true day count (leap years included).
/// `entries_by_day` is the per-day reduction a [`Summary`] carries; days
/// outside the month are ignored. How the cells are arranged into rows is
/// the caller's business.
///
/// [`Summary`]: crate::summary::Summary
///
/// ```
/// use rasa_core::calendar::{EMPTY_COLOR, month_cells};
/// use std::collections::BTreeMap;
///
/// let cells = month_cells(2, 2024, &BTreeMap::new()).unwrap();
/// assert_eq!(cells.len(), 29);
/// assert!(cells.iter().all(|c| c.color == EMPTY_COLOR));
/// ```
pub fn month_cells(
    month: u32,
    year: i32,
    entries_by_day: &BTreeMap<u32, JournalEntry>,
) -> Result<Vec<Cell>, Error> {
    let days = days_in_month(month, year)?;

    Ok((1..=days)
        .map(|day| {
            let rasa = entries_by_day.get(&day).map(|entry| entry.rasa);
            Cell {
                day,
                rasa,
                color: rasa.map(Rasa::color).unwrap_or(EMPTY_COLOR),
            }
        })
        .collect())
}

/// How many days the given month has, leap years accounted for.
pub fn days_in_month(month: u32, year: i32) -> Result<u32, Error> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidMonth(month))?;
    let next_first = first
        .checked_add_months(Months::new(1))
        .ok_or(Error::InvalidMonth(month))?;
    Ok(next_first.signed_duration_since(first).num_days() as u32)
}

/// The color-to-rasa key shown under the calendar, in catalog order.
pub fn legend() -> Vec<(&'static str, Rasa)> {
    Rasa::all().map(|rasa| (rasa.color(), rasa)).collect()
}

//! Parses raw log rows into structured [`JournalEntry`] values.

use crate::entry::JournalEntry;
use crate::journal::QueryError;
use crate::rasa::Rasa;
use crate::render::{DATE_FORMAT, NO_PROMPT, NO_VERSE};
use chrono::NaiveDate;
use csv::StringRecord;

/// Parses one data row of the mood log.
///
/// A row is **malformed** when its date does not parse, its mood name does
/// not resolve in the catalog, or a column is missing; the caller skips such
/// rows and keeps the returned [`QueryError`] as a diagnostic. The `Meaning`
/// and `Color` columns are denormalized display data and are ignored here:
/// the catalog is authoritative for both.
///
/// `line` is the 1-based line number in the log file, used only for
/// diagnostics.
pub fn parse_record(line: u64, record: &StringRecord) -> Result<JournalEntry, QueryError> {
    let field = |idx: usize, name: &str| -> Result<&str, QueryError> {
        record.get(idx).ok_or_else(|| QueryError::MalformedRow {
            line,
            reason: format!("missing {name} column"),
        })
    };

    let date_str = field(0, "Date")?.trim();
    let date =
        NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| QueryError::MalformedRow {
            line,
            reason: format!("unparseable date '{date_str}'"),
        })?;

    let mood = field(1, "Mood")?;
    let rasa = Rasa::from_name(mood).ok_or_else(|| QueryError::MalformedRow {
        line,
        reason: format!("unknown mood '{}'", mood.trim()),
    })?;

    let prompt = decode_optional(field(4, "Prompt")?, NO_PROMPT);
    let verse = decode_optional(field(5, "Verse")?, NO_VERSE);

    Ok(JournalEntry {
        date,
        rasa,
        prompt,
        verse,
    })
}

/// Maps an empty field or the sentinel back to `None`.
fn decode_optional(text: &str, sentinel: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == sentinel {
        None
    } else {
        Some(trimmed.to_string())
    }
}

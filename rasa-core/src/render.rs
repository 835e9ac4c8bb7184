//! Pure encoding helpers for the mood log's row format.
//!
//! Header:  `Date,Mood,Meaning,Color,Prompt,Verse`
//! Row:     `14 Jun 2025,Veeram,Heroism/Courage,orange,a battlecry,...`
//!
//! Field quoting and UTF-8 are the CSV writer's job; these helpers only
//! produce the field values.

use crate::entry::JournalEntry;
use chrono::NaiveDate;

/// Column names of the backing log, written once when the file is created.
pub const HEADER: [&str; 6] = ["Date", "Mood", "Meaning", "Color", "Prompt", "Verse"];

/// Date wire format, e.g. `02 Jun 2025` (day zero-padded).
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Sentinel stored in the `Prompt` column when the user skipped the prompt.
pub const NO_PROMPT: &str = "No prompt";

/// Sentinel stored in the `Verse` column when the user skipped the verse.
pub const NO_VERSE: &str = "No verse today.";

/// `14 Jun 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The six field values of one log row, in header order.
pub fn entry_record(entry: &JournalEntry) -> [String; 6] {
    [
        format_date(entry.date),
        entry.rasa.name().to_string(),
        entry.rasa.meaning().to_string(),
        entry.rasa.color().to_string(),
        entry
            .prompt
            .clone()
            .unwrap_or_else(|| NO_PROMPT.to_string()),
        entry.verse.clone().unwrap_or_else(|| NO_VERSE.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasa::Rasa;

    #[test]
    fn dates_are_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(format_date(d), "02 Jun 2025");
    }

    #[test]
    fn record_uses_catalog_display_fields() {
        let entry = JournalEntry {
            date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            rasa: Rasa::Veeram,
            prompt: Some("a battlecry".to_string()),
            verse: Some("steel in the spine".to_string()),
        };
        let record = entry_record(&entry);
        assert_eq!(record[0], "14 Jun 2025");
        assert_eq!(record[1], "Veeram");
        assert_eq!(record[2], "Heroism/Courage");
        assert_eq!(record[3], "orange");
        assert_eq!(record[4], "a battlecry");
        assert_eq!(record[5], "steel in the spine");
    }

    #[test]
    fn skipped_fields_encode_as_sentinels() {
        let entry = JournalEntry {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            rasa: Rasa::Shantam,
            prompt: None,
            verse: None,
        };
        let record = entry_record(&entry);
        assert_eq!(record[4], NO_PROMPT);
        assert_eq!(record[5], NO_VERSE);
    }
}

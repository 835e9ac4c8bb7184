//! The core `Journal` struct and its associated types, providing the primary API for interaction.

use crate::config::Config;
use crate::entry::JournalEntry;
use crate::error::Error;
use crate::parse_entries::parse_record;
use crate::rasa::Rasa;
use crate::render::{HEADER, entry_record};
use chrono::Datelike;
use std::fs::{File, OpenOptions, create_dir_all};
use std::io;
use std::path::PathBuf;

/// The central struct for all mood log operations.
///
/// An instance of `Journal` holds the configuration and provides methods
/// for appending to and querying the append-only log.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
}

/// Represents a non-critical issue that occurred during a query.
///
/// This is used to report problems (e.g., malformed rows in a hand-edited
/// log) without stopping a larger query operation.
#[derive(Debug)]
pub enum QueryError {
    /// One row was skipped; `line` is its 1-based line number in the log.
    MalformedRow { line: u64, reason: String },
    /// The log exists but could not be read at all.
    FileError { path: PathBuf, reason: String },
}

/// The complete result of a query: successfully parsed entries in file
/// order, plus any rows that had to be skipped. `errors.len()` is the
/// skipped-row count.
#[derive(Debug)]
pub struct QueryResult {
    pub entries: Vec<JournalEntry>,
    pub errors: Vec<QueryError>,
}

impl Journal {
    /// Creates a new `Journal` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self, Error> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// This also ensures that the log's parent directory exists. The log
    /// file itself is only created by the first [`append`](Self::append).
    pub fn with_config(config: Config) -> Result<Self, Error> {
        if let Some(parent) = config.journal_file.parent() {
            create_dir_all(parent).map_err(|e| Error::Storage {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(Self { config })
    }

    /// Appends one entry to the mood log.
    ///
    /// The log is opened in create-or-append mode, so prior rows are never
    /// rewritten; the fixed header row is written first when the file is
    /// new. Each append is one complete row.
    pub fn append(&self, entry: &JournalEntry) -> Result<(), Error> {
        let path = &self.config.journal_file;
        let is_new = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| self.storage_error(e))?;

        let mut writer = csv::Writer::from_writer(file);
        if is_new {
            writer
                .write_record(HEADER)
                .map_err(|e| self.storage_error(csv_io_error(e)))?;
        }
        writer
            .write_record(&entry_record(entry))
            .map_err(|e| self.storage_error(csv_io_error(e)))?;
        writer.flush().map_err(|e| self.storage_error(e))?;
        Ok(())
    }

    /// Reads every entry in the log, in file (append) order.
    ///
    /// The log is re-read from the beginning on every call. A missing log
    /// yields an empty result rather than an error; malformed rows are
    /// skipped and reported through [`QueryResult::errors`].
    pub fn query_all(&self) -> QueryResult {
        let path = &self.config.journal_file;
        let mut entries = Vec::new();
        let mut errors = Vec::new();

        if !path.exists() {
            return QueryResult { entries, errors };
        }
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                errors.push(QueryError::FileError {
                    path: path.clone(),
                    reason: e.to_string(),
                });
                return QueryResult { entries, errors };
            }
        };

        // The header row is consumed by the reader; data rows start at line 2.
        let mut reader = csv::Reader::from_reader(file);
        for result in reader.records() {
            match result {
                Ok(record) => {
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    match parse_record(line, &record) {
                        Ok(entry) => entries.push(entry),
                        Err(error) => errors.push(error),
                    }
                }
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    errors.push(QueryError::MalformedRow {
                        line,
                        reason: e.to_string(),
                    });
                }
            }
        }
        QueryResult { entries, errors }
    }

    /// Reads the entries whose date falls in the given month and year.
    ///
    /// Matching is exact on the calendar month number, not its name.
    pub fn query_by_period(&self, month: u32, year: i32) -> Result<QueryResult, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        let mut result = self.query_all();
        result
            .entries
            .retain(|e| e.date.month() == month && e.date.year() == year);
        Ok(result)
    }

    /// Reads the entries recorded for one rasa, in file order.
    ///
    /// Stored mood names resolve through the catalog case-insensitively
    /// while rows are parsed, so this typed filter honors the log's
    /// name-based matching.
    pub fn query_by_rasa(&self, rasa: Rasa) -> QueryResult {
        let mut result = self.query_all();
        result.entries.retain(|e| e.rasa == rasa);
        result
    }

    fn storage_error(&self, source: io::Error) -> Error {
        Error::Storage {
            path: self.config.journal_file.clone(),
            source,
        }
    }
}

/// Unwraps the io error inside a csv error; csv-level write failures
/// (which our fixed-width records cannot produce) degrade to `InvalidData`.
fn csv_io_error(error: csv::Error) -> io::Error {
    match error.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn mk_journal() -> (Journal, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let log = tmp.path().join("rasa").join("mood_tracking.csv");
        let j = Journal::with_config(mk_config(log)).unwrap();
        (j, tmp)
    }

    fn entry(date: NaiveDate, rasa: Rasa) -> JournalEntry {
        JournalEntry {
            date,
            rasa,
            prompt: None,
            verse: None,
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn append_creates_log_with_header() {
        let (j, _tmp) = mk_journal();
        j.append(&entry(ymd(2025, 6, 14), Rasa::Veeram)).unwrap();

        let content = fs::read_to_string(&j.config.journal_file).unwrap();
        assert!(content.starts_with("Date,Mood,Meaning,Color,Prompt,Verse\n"));
        assert!(content.contains("14 Jun 2025,Veeram,Heroism/Courage,orange,No prompt,No verse today.\n"));
    }

    #[test]
    fn append_preserves_prior_rows_and_writes_header_once() {
        let (j, _tmp) = mk_journal();
        j.append(&entry(ymd(2025, 6, 14), Rasa::Veeram)).unwrap();
        j.append(&entry(ymd(2025, 6, 15), Rasa::Hasyam)).unwrap();

        let content = fs::read_to_string(&j.config.journal_file).unwrap();
        assert_eq!(content.matches("Date,Mood").count(), 1);
        let result = j.query_all();
        assert!(result.errors.is_empty());
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].date, ymd(2025, 6, 14));
        assert_eq!(result.entries[1].date, ymd(2025, 6, 15));
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let (j, _tmp) = mk_journal();
        let with_verse = JournalEntry {
            date: ymd(2025, 6, 14),
            rasa: Rasa::Shringaram,
            prompt: Some("love in silence".to_string()),
            verse: Some("the kettle hums for two".to_string()),
        };
        let skipped = entry(ymd(2025, 6, 15), Rasa::Shantam);
        j.append(&with_verse).unwrap();
        j.append(&skipped).unwrap();

        let result = j.query_all();
        assert!(result.errors.is_empty());
        assert_eq!(result.entries, vec![with_verse, skipped]);
    }

    #[test]
    fn fields_with_delimiters_are_quoted_and_survive() {
        let (j, _tmp) = mk_journal();
        let tricky = JournalEntry {
            date: ymd(2025, 6, 16),
            rasa: Rasa::Adbhutam,
            prompt: Some("wonder, in nature".to_string()),
            verse: Some("a \"wow\" caught\nmid-breath".to_string()),
        };
        j.append(&tricky).unwrap();

        let result = j.query_all();
        assert!(result.errors.is_empty());
        assert_eq!(result.entries, vec![tricky]);
    }

    #[test]
    fn query_all_on_missing_log_is_empty() {
        let (j, _tmp) = mk_journal();
        let result = j.query_all();
        assert!(result.entries.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn query_all_is_restartable() {
        let (j, _tmp) = mk_journal();
        j.append(&entry(ymd(2025, 6, 14), Rasa::Veeram)).unwrap();
        assert_eq!(j.query_all().entries.len(), 1);
        assert_eq!(j.query_all().entries.len(), 1);
    }

    #[test]
    fn query_by_period_filters_on_month_and_year() {
        let (j, _tmp) = mk_journal();
        j.append(&entry(ymd(2025, 6, 14), Rasa::Veeram)).unwrap();
        j.append(&entry(ymd(2025, 6, 2), Rasa::Hasyam)).unwrap();
        j.append(&entry(ymd(2025, 1, 1), Rasa::Karunam)).unwrap();

        let result = j.query_by_period(6, 2025).unwrap();
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].date, ymd(2025, 6, 14));
        assert_eq!(result.entries[1].date, ymd(2025, 6, 2));
    }

    #[test]
    fn query_by_period_rejects_invalid_month() {
        let (j, _tmp) = mk_journal();
        assert!(matches!(
            j.query_by_period(13, 2025),
            Err(Error::InvalidMonth(13))
        ));
        assert!(matches!(
            j.query_by_period(0, 2025),
            Err(Error::InvalidMonth(0))
        ));
    }

    #[test]
    fn query_by_rasa_filters_in_file_order() {
        let (j, _tmp) = mk_journal();
        j.append(&entry(ymd(2025, 6, 1), Rasa::Karunam)).unwrap();
        j.append(&entry(ymd(2025, 6, 2), Rasa::Veeram)).unwrap();
        j.append(&entry(ymd(2025, 7, 3), Rasa::Karunam)).unwrap();

        let result = j.query_by_rasa(Rasa::Karunam);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].date, ymd(2025, 6, 1));
        assert_eq!(result.entries[1].date, ymd(2025, 7, 3));
    }

    #[test]
    fn malformed_date_row_is_skipped_not_fatal() {
        let (j, _tmp) = mk_journal();
        fs::write(
            &j.config.journal_file,
            "Date,Mood,Meaning,Color,Prompt,Verse\n\
             14 Jun 2025,Veeram,Heroism/Courage,orange,No prompt,No verse today.\n\
             not a date,Hasyam,Laughter/Happiness,yellow,No prompt,No verse today.\n",
        )
        .unwrap();

        let result = j.query_all();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].rasa, Rasa::Veeram);
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            &result.errors[0],
            QueryError::MalformedRow { line: 3, .. }
        ));
    }

    #[test]
    fn unknown_mood_row_is_skipped_not_fatal() {
        let (j, _tmp) = mk_journal();
        fs::write(
            &j.config.journal_file,
            "Date,Mood,Meaning,Color,Prompt,Verse\n\
             01 Jun 2025,Gloom,?,?,No prompt,No verse today.\n\
             02 Jun 2025,shantam,Peace/Tranquility,grey,No prompt,No verse today.\n",
        )
        .unwrap();

        let result = j.query_all();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].rasa, Rasa::Shantam);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn row_with_wrong_field_count_is_skipped_not_fatal() {
        let (j, _tmp) = mk_journal();
        fs::write(
            &j.config.journal_file,
            "Date,Mood,Meaning,Color,Prompt,Verse\n\
             14 Jun 2025,Veeram\n\
             02 Jun 2025,Hasyam,Laughter/Happiness,yellow,No prompt,No verse today.\n",
        )
        .unwrap();

        let result = j.query_all();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].rasa, Rasa::Hasyam);
        assert_eq!(result.errors.len(), 1);
    }
}

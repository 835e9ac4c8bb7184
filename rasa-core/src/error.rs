use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for journal operations.
///
/// Per-row problems found while reading the mood log are deliberately not
/// part of this enum: a corrupt row never aborts a query. Those surface as
/// [`QueryError`](crate::journal::QueryError) values inside a
/// [`QueryResult`](crate::journal::QueryResult) instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A rasa id outside the catalog range 1..=9.
    #[error("no rasa with id {0}; valid ids are 1-9")]
    UnknownRasa(u8),
    /// A verse that is blank or longer than the 100-character limit.
    #[error("invalid verse: {reason}")]
    InvalidVerse { reason: String },
    /// A calendar month outside 1..=12.
    #[error("invalid month {0}; expected a number from 1 to 12")]
    InvalidMonth(u32),
    /// The mood log could not be opened or written.
    #[error("cannot access mood log at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A config file exists but could not be read or parsed.
    #[error("cannot load config from {path}: {reason}")]
    Config { path: PathBuf, reason: String },
    /// A summary was requested over zero entries.
    #[error("no entries to summarize")]
    EmptyPeriod,
}

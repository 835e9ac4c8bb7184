pub mod calendar;
pub mod config;
pub mod entry;
pub mod error;
pub mod journal;
pub mod parse_entries;
pub mod rasa;
pub mod render;
pub mod summary;

pub use config::Config;
pub use entry::JournalEntry;
pub use error::Error;
pub use journal::{Journal, QueryError, QueryResult};
pub use rasa::Rasa;
pub use summary::{Summary, summarize};

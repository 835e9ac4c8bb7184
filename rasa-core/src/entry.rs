use crate::error::Error;
use crate::rasa::Rasa;
use chrono::NaiveDate;

/// Upper bound on verse length, counted in characters like the journaling
/// flow that enforces it at input time.
pub const MAX_VERSE_CHARS: usize = 100;

/// One journal record. Entries are appended once and never mutated.
///
/// `prompt` and `verse` are `None` when the user skipped them; the log
/// encodes those as the `No prompt` / `No verse today.` sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub rasa: Rasa,
    pub prompt: Option<String>,
    pub verse: Option<String>,
}

impl JournalEntry {
    /// Builds an entry for the journaling flow, validating the verse.
    ///
    /// A `Some` verse must be non-blank after trimming and at most
    /// [`MAX_VERSE_CHARS`] characters; the trimmed text is what gets
    /// stored. Rows read back from the log skip this constructor, so a
    /// hand-edited overlong verse still loads.
    pub fn new(
        date: NaiveDate,
        rasa: Rasa,
        prompt: Option<String>,
        verse: Option<String>,
    ) -> Result<Self, Error> {
        let verse = match verse {
            Some(text) => Some(validate_verse(&text)?),
            None => None,
        };
        Ok(Self {
            date,
            rasa,
            prompt,
            verse,
        })
    }
}

fn validate_verse(text: &str) -> Result<String, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidVerse {
            reason: "verse cannot be blank".to_string(),
        });
    }
    let chars = trimmed.chars().count();
    if chars > MAX_VERSE_CHARS {
        return Err(Error::InvalidVerse {
            reason: format!("verse is {chars} characters; the limit is {MAX_VERSE_CHARS}"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
    }

    #[test]
    fn verse_of_exactly_100_chars_is_accepted() {
        let verse = "x".repeat(100);
        let entry = JournalEntry::new(day(), Rasa::Veeram, None, Some(verse.clone())).unwrap();
        assert_eq!(entry.verse.as_deref(), Some(verse.as_str()));
    }

    #[test]
    fn verse_of_101_chars_is_rejected() {
        let verse = "x".repeat(101);
        let result = JournalEntry::new(day(), Rasa::Veeram, None, Some(verse));
        assert!(matches!(result, Err(Error::InvalidVerse { .. })));
    }

    #[test]
    fn blank_verse_is_rejected() {
        let result = JournalEntry::new(day(), Rasa::Veeram, None, Some("   \n ".to_string()));
        assert!(matches!(result, Err(Error::InvalidVerse { .. })));
    }

    #[test]
    fn verse_is_stored_trimmed() {
        let entry =
            JournalEntry::new(day(), Rasa::Hasyam, None, Some("  a quiet joy  ".to_string()))
                .unwrap();
        assert_eq!(entry.verse.as_deref(), Some("a quiet joy"));
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        // 100 two-byte characters are still within the limit.
        let verse = "é".repeat(100);
        assert!(JournalEntry::new(day(), Rasa::Karunam, None, Some(verse)).is_ok());
    }

    #[test]
    fn skipped_prompt_and_verse_stay_none() {
        let entry = JournalEntry::new(day(), Rasa::Shantam, None, None).unwrap();
        assert_eq!(entry.prompt, None);
        assert_eq!(entry.verse, None);
    }
}

use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rasa_core::Rasa;

use crate::render::ColorMode;

/// rasa — Navarasa mood journal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(
        long,
        value_enum,
        env = "RASA_COLOR",
        default_value_t = ColorMode::Auto,
        global = true
    )]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a mood entry (e.g., `rasa add veeram`, `rasa add 5 held the door open`)
    Add(AddArgs),
    /// Print one reflection prompt for a rasa
    Prompt {
        /// Rasa id (1-9) or name (e.g., `veeram`)
        #[arg(value_parser = parse_rasa)]
        rasa: Rasa,
    },
    /// A month in review: counts, dominant rasa and the mood calendar
    Summary {
        /// Month number or name (e.g., `6`, `Jun`, `june`)
        #[arg(value_parser = parse_month)]
        month: u32,
        /// Calendar year (e.g., `2025`)
        year: i32,
    },
    /// List every entry recorded for a rasa
    Entries {
        /// Rasa id (1-9) or name (e.g., `veeram`)
        #[arg(value_parser = parse_rasa)]
        rasa: Rasa,
    },
    /// The nine rasas, their colors and what they stand for
    About,
    /// Prints the mood log location
    Path,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Rasa id (1-9) or name (e.g., `veeram`)
    #[arg(value_parser = parse_rasa)]
    pub rasa: Rasa,
    /// Free text verse for the entry (e.g., `rasa add 5 held the door open`)
    pub verse: Vec<String>,
    /// Draw a reflection prompt and store it with the entry.
    /// Without an inline verse this opens your $EDITOR to write one.
    #[arg(long, short)]
    pub prompt: bool,
    /// Record for this date instead of today (e.g., `2025-06-14`)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

fn parse_rasa(s: &str) -> Result<Rasa, String> {
    let token = s.trim();
    if let Ok(id) = token.parse::<u8>() {
        return Rasa::from_id(id).map_err(|e| e.to_string());
    }
    Rasa::from_name(token)
        .ok_or_else(|| format!("'{s}' is not a rasa; use 1-9 or a name like 'veeram'"))
}

fn parse_month(s: &str) -> Result<u32, String> {
    let token = s.trim();
    if let Ok(n) = token.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(format!("month must be 1-12, got {n}"));
    }
    // chrono accepts full and abbreviated month names, case-insensitively.
    NaiveDate::parse_from_str(&format!("{token} 1 2000"), "%B %d %Y")
        .map(|d| d.month())
        .map_err(|_| format!("'{s}' is not a month name or number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rasa_tokens_accept_ids_and_names() {
        assert_eq!(parse_rasa("1").unwrap(), Rasa::Shringaram);
        assert_eq!(parse_rasa("9").unwrap(), Rasa::Shantam);
        assert_eq!(parse_rasa("veeram").unwrap(), Rasa::Veeram);
        assert_eq!(parse_rasa("SHANTAM").unwrap(), Rasa::Shantam);
        assert_eq!(parse_rasa(" Karunam ").unwrap(), Rasa::Karunam);
    }

    #[test]
    fn rasa_tokens_reject_unknown_input() {
        assert!(parse_rasa("0").is_err());
        assert!(parse_rasa("10").is_err());
        assert!(parse_rasa("bliss").is_err());
    }

    #[test]
    fn month_tokens_accept_numbers_and_names() {
        assert_eq!(parse_month("6").unwrap(), 6);
        assert_eq!(parse_month("12").unwrap(), 12);
        assert_eq!(parse_month("Jun").unwrap(), 6);
        assert_eq!(parse_month("june").unwrap(), 6);
        assert_eq!(parse_month("DECEMBER").unwrap(), 12);
    }

    #[test]
    fn month_tokens_reject_out_of_range_input() {
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
        assert!(parse_month("smarch").is_err());
    }
}

use crate::error::Error;
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the mood log (a CSV file, created on first append).
    pub journal_file: PathBuf,
    /// Preferred editor name/binary for composing verses. Optional; the CLI
    /// will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_file: Option<PathBuf>,
    editor: Option<String>,
}

impl Config {
    /// Loads config from disk (first XDG path, then native) and applies
    /// defaults. A missing config file is not an error; a present but
    /// unreadable or unparseable one is, so typos don't silently send
    /// entries to the wrong log.
    pub fn load() -> Result<Self, Error> {
        let file_config = Self::read_file_config()?;
        let journal_file = file_config
            .journal_file
            .unwrap_or_else(Self::default_journal_file);
        Ok(Self {
            journal_file,
            editor: file_config.editor,
        })
    }

    /// Default log location: `{data_dir}/rasa/mood_tracking.csv`
    /// - macOS:   `~/Library/Application Support/rasa/mood_tracking.csv`
    /// - Linux:   `$XDG_DATA_HOME/rasa/...` or `~/.local/share/rasa/...`
    /// - Windows: `%APPDATA%\rasa\...`
    fn default_journal_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("rasa");
            p.push("mood_tracking.csv");
            p
        } else {
            PathBuf::from("./mood_tracking.csv")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("rasa").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("rasa").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig, Error> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s = fs::read_to_string(&path).map_err(|e| Error::Config {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            return Self::parse_file(&s).map_err(|e| Error::Config {
                path,
                reason: e.to_string(),
            });
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str::<FileConfig>(s)
    }
}

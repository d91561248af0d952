//! Error types for dayline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dayline
#[derive(Debug, Error)]
pub enum DaylineError {
    #[error("Not a dayline directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Entry text is empty")]
    EmptyEntry,

    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Entry ids exhausted: the journal already holds the largest possible id")]
    EntryIdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaylineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaylineError::NotJournalDirectory(_) => 2,
            DaylineError::InvalidMonth(_) => 3,
            DaylineError::EntryNotFound(_) => 4,
            DaylineError::EmptyEntry => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaylineError::NotJournalDirectory(path) => {
                format!(
                    "Not a dayline directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'dayline init' in this directory to create a new journal\n\
                    • Navigate to an existing dayline directory\n\
                    • Set DAYLINE_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DaylineError::InvalidMonth(input) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Valid months:\n\
                    • this, last\n\
                    • Specific months: YYYY-MM (e.g., 2025-01)\n\n\
                    Examples:\n\
                    dayline moods this\n\
                    dayline calendar 2025-01",
                    input
                )
            }
            DaylineError::EntryNotFound(id) => {
                format!(
                    "No entry with id {}\n\n\
                    Suggestions:\n\
                    • Use 'dayline list' to see entry ids",
                    id
                )
            }
            DaylineError::EmptyEntry => "Entry text is empty\n\n\
                Write at least one non-whitespace character, e.g.:\n\
                dayline add \"Walked to the lake\" --mood happy"
                .to_string(),
            DaylineError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: dayline config export_dir backups",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaylineError
pub type Result<T> = std::result::Result<T, DaylineError>;

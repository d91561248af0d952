//! Configuration management

use crate::error::{DaylineError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the journal metadata directory
pub const JOURNAL_DIR: &str = ".dayline";

fn default_export_dir() -> String {
    "exports".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where exports land, relative to the journal root unless absolute
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Overrides the system offset used to decide where a day starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            export_dir: default_export_dir(),
            utc_offset_minutes: None,
            created: Utc::now(),
        }
    }

    /// Load config from .dayline/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaylineError::NotJournalDirectory(path.to_path_buf())
            } else {
                DaylineError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DaylineError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .dayline/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join("config.toml");

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DaylineError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Export directory resolved against the journal root
    pub fn export_path(&self, root: &Path) -> PathBuf {
        let dir = Path::new(&self.export_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root.join(dir)
        }
    }

    /// Configured offset, if any
    pub fn utc_offset(&self) -> Result<Option<FixedOffset>> {
        match self.utc_offset_minutes {
            None => Ok(None),
            Some(minutes) => parse_offset_minutes(minutes).map(Some),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate an offset in minutes east of UTC.
pub fn parse_offset_minutes(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            DaylineError::Config(format!(
                "Invalid utc_offset_minutes: {} (must be within ±1439)",
                minutes
            ))
        })
}

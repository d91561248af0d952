//! Key-value persistence

use crate::error::{DaylineError, Result};
use crate::infrastructure::config::{Config, JOURNAL_DIR};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Minimal string key-value storage the journal persists into
pub trait KeyValueStore {
    /// Read a value; `None` when the key was never written or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Forget `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a journal directory: one file per key under `.dayline/store/`
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a store for the journal rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Find the journal root.
    /// Checks DAYLINE_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYLINE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(DaylineError::Config(format!(
                    "DAYLINE_ROOT is set to '{}' but no .dayline directory found. \
                    Run 'dayline init' in that directory or unset DAYLINE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.dayline` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DaylineError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    /// Create the `.dayline` directory structure
    pub fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(DaylineError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(journal_dir.join("store"))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DaylineError::Config(format!("Invalid store key: '{}'", key)));
        }
        Ok(self.root.join(JOURNAL_DIR).join("store").join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DaylineError::Io(e)),
        }
    }

    /// Write to a temp file beside the target, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_file_name(format!("{}.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        let replaced = if cfg!(windows) && path.exists() {
            fs::remove_file(&path).and_then(|_| fs::rename(&tmp_path, &path))
        } else {
            fs::rename(&tmp_path, &path)
        };

        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            return Err(DaylineError::Io(e));
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DaylineError::Io(e)),
        }
    }
}

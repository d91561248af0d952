//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, utc_offset_minutes: Option<i32>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());
    let mut config = Config::new();
    config.utc_offset_minutes = utc_offset_minutes;
    // Reject a bad offset before anything is written
    config.utc_offset()?;

    store.initialize()?;
    store.save_config(&config)?;

    tracing::info!("Initialized journal at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("journal");

        init(&root, Some(60)).unwrap();

        let config = Config::load_from_dir(&root).unwrap();
        assert_eq!(config.utc_offset_minutes, Some(60));
        assert!(root.join(".dayline/store").is_dir());
    }

    #[test]
    fn test_init_rejects_bad_offset() {
        let temp = TempDir::new().unwrap();
        assert!(init(temp.path(), Some(5000)).is_err());
        assert!(!temp.path().join(".dayline").exists());
    }
}

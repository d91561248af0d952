//! Config management use case

use crate::error::{DaylineError, Result};
use crate::infrastructure::config::parse_offset_minutes;
use crate::infrastructure::{Config, FileStore};

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "export_dir" => Ok(config.export_dir.clone()),
            "utc_offset_minutes" => Ok(config
                .utc_offset_minutes
                .map(|m| m.to_string())
                .unwrap_or_else(|| "system".to_string())),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DaylineError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: export_dir, utc_offset_minutes, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "export_dir" => {
                if value.trim().is_empty() {
                    return Err(DaylineError::Config(
                        "export_dir cannot be empty".to_string(),
                    ));
                }
                config.export_dir = value.to_string();
            }
            "utc_offset_minutes" => {
                config.utc_offset_minutes = match value.trim() {
                    "system" | "" => None,
                    raw => {
                        let minutes: i32 = raw.parse().map_err(|_| {
                            DaylineError::Config(format!(
                                "Invalid utc_offset_minutes: '{}' (expected minutes east of UTC or 'system')",
                                raw
                            ))
                        })?;
                        parse_offset_minutes(minutes)?;
                        Some(minutes)
                    }
                };
            }
            "created" => {
                return Err(DaylineError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DaylineError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: export_dir, utc_offset_minutes",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        store.save_config(&Config::new()).unwrap();
        ConfigService::new(store)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("export_dir").unwrap(), "exports");
        assert_eq!(service.get("utc_offset_minutes").unwrap(), "system");
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("export_dir", "out").unwrap();
        service.set("utc_offset_minutes", "-300").unwrap();
        assert_eq!(service.get("export_dir").unwrap(), "out");
        assert_eq!(service.get("utc_offset_minutes").unwrap(), "-300");

        service.set("utc_offset_minutes", "system").unwrap();
        assert_eq!(service.get("utc_offset_minutes").unwrap(), "system");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("utc_offset_minutes", "abc").is_err());
        assert!(service.set("utc_offset_minutes", "2000").is_err());
        assert!(service.set("created", "2025-01-01T00:00:00Z").is_err());
        assert!(service.set("color", "blue").is_err());
        assert!(service.get("color").is_err());
    }
}

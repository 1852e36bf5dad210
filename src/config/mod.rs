use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::cli::output::OutputPreferences;
use crate::errors::TrackerError;
use crate::ledger::{CategoryPolicy, UndoMode, DEFAULT_CATEGORIES};
use crate::utils::paths::{self, ensure_dir};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub undo_mode: UndoMode,
    #[serde(default)]
    pub output: OutputPreferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: Self::default_categories(),
            undo_mode: UndoMode::default(),
            output: OutputPreferences::default(),
        }
    }
}

impl Config {
    fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.categories.is_empty() {
            return Err(TrackerError::InvalidConfig(
                "at least one category must be configured".into(),
            ));
        }
        if let Some(blank) = self.categories.iter().find(|name| name.trim().is_empty()) {
            return Err(TrackerError::InvalidConfig(format!(
                "category names cannot be blank (got {blank:?})"
            )));
        }
        Ok(())
    }

    pub fn category_policy(&self) -> CategoryPolicy {
        CategoryPolicy::new(self.categories.iter().cloned())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
        })
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), TrackerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, ConfigManager) {
        let temp = TempDir::new().expect("create temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("manager");
        (temp, manager)
    }

    #[test]
    fn load_without_file_yields_defaults() {
        let (_temp, manager) = manager();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.category_policy().allows("food"));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let (_temp, manager) = manager();
        let config = Config {
            categories: vec!["rent".into(), "gym".into()],
            undo_mode: UndoMode::RemoveOnly,
            output: OutputPreferences {
                plain_mode: true,
                quiet_mode: false,
            },
        };
        manager.save(&config).unwrap();
        assert!(manager.path().exists());
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let (_temp, manager) = manager();
        fs::write(manager.path(), r#"{ "undo_mode": "remove-only" }"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.undo_mode, UndoMode::RemoveOnly);
        assert_eq!(config.categories, Config::default_categories());
    }

    #[test]
    fn empty_category_list_is_rejected() {
        let (_temp, manager) = manager();
        let config = Config {
            categories: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(
            manager.save(&config),
            Err(TrackerError::InvalidConfig(_))
        ));

        fs::write(manager.path(), r#"{ "categories": ["food", "  "] }"#).unwrap();
        assert!(matches!(manager.load(), Err(TrackerError::InvalidConfig(_))));
    }
}

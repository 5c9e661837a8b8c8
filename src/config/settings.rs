//! User settings for pocket-ledger
//!
//! Manages user preferences: the default ledger file, the log level and the
//! default number of rows shown by `list`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings for pocket-ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Ledger file to use when `--file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// tracing filter directive (e.g. "warn", "pocket=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default maximum number of rows printed by `list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_limit: Option<usize>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: default_log_level(),
            list_limit: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The ledger file to use, given an optional explicit override
    pub fn resolve_data_file(&self, paths: &LedgerPaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| paths.default_data_file())
    }
}

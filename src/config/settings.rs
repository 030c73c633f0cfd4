//! User settings for FinFlow
//!
//! Manages user preferences: currency symbol, report date format, and
//! whether budget warnings are printed after each recorded transaction.

use serde::{Deserialize, Serialize};

use super::paths::FinFlowPaths;
use crate::error::FinFlowError;

/// User settings for FinFlow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to displayed amounts (empty = none)
    #[serde(default)]
    pub currency_symbol: String,

    /// Date format used in report file names (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether to warn about over-budget categories and overall overspend
    /// right after a transaction is recorded
    #[serde(default = "default_budget_warnings")]
    pub budget_warnings: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_budget_warnings() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: String::new(),
            date_format: default_date_format(),
            budget_warnings: default_budget_warnings(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist yet
    pub fn load_or_create(paths: &FinFlowPaths) -> Result<Self, FinFlowError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            FinFlowError::Config(format!(
                "Failed to read {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            FinFlowError::Config(format!(
                "Failed to parse {}: {}",
                settings_path.display(),
                e
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinFlowPaths) -> Result<(), FinFlowError> {
        paths.ensure_directories()?;

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), json).map_err(|e| {
            FinFlowError::Config(format!("Failed to write settings: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.currency_symbol.is_empty());
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert!(settings.budget_warnings);
    }

    #[test]
    fn test_load_or_create_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert!(settings.budget_warnings);
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.budget_warnings = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.budget_warnings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "{}").unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.budget_warnings);
    }
}

//! Path management for FinFlow
//!
//! Provides XDG-compliant path resolution for configuration, data, and
//! reports.
//!
//! ## Path Resolution Order
//!
//! 1. `FINFLOW_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finflow` or `~/.config/finflow`
//! 3. Windows: `%APPDATA%\finflow`

use std::path::PathBuf;

use crate::error::FinFlowError;

/// Manages all paths used by FinFlow
#[derive(Debug, Clone)]
pub struct FinFlowPaths {
    /// Base directory for all FinFlow data
    base_dir: PathBuf,
}

impl FinFlowPaths {
    /// Create a new FinFlowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinFlowError> {
        let base_dir = if let Ok(custom) = std::env::var("FINFLOW_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinFlowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/finflow/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/finflow/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the reports directory (~/.config/finflow/reports/)
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to a user's wallet snapshot
    pub fn wallet_file(&self, login: &str) -> PathBuf {
        self.data_dir().join(format!("{}.wallet.json", login))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FinFlowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinFlowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinFlowError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| FinFlowError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinFlowError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| FinFlowError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("finflow"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinFlowError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinFlowError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finflow"))
}

//! Storage layer for FinFlow
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod users;
pub mod wallets;

pub use file_io::{read_json, write_json_atomic};
pub use users::UserRepository;
pub use wallets::{deserialize_wallet, serialize_wallet, WalletRepository, WalletSnapshot};

use crate::config::paths::FinFlowPaths;
use crate::error::FinFlowError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinFlowPaths,
    pub users: UserRepository,
    pub wallets: WalletRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinFlowPaths) -> Result<Self, FinFlowError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            wallets: WalletRepository::new(&paths),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinFlowPaths {
        &self.paths
    }

    /// Load all persistent state needed at startup
    pub fn load_all(&mut self) -> Result<(), FinFlowError> {
        self.users.load()?;
        Ok(())
    }
}

//! User repository for JSON storage
//!
//! Manages loading and saving registered users to users.json.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::FinFlowError;
use crate::models::User;

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UserData {
    pub users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    users: RwLock<HashMap<String, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), FinFlowError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut users = self
            .users
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        users.clear();
        for user in file_data.users {
            users.insert(user.login.clone(), user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), FinFlowError> {
        let users = self
            .users
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut user_list: Vec<_> = users.values().cloned().collect();
        user_list.sort_by(|a, b| a.login.cmp(&b.login));

        write_json_atomic(&self.path, &UserData { users: user_list })
    }

    /// Look up a user by login
    pub fn get(&self, login: &str) -> Result<Option<User>, FinFlowError> {
        let users = self
            .users
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.get(login).cloned())
    }

    /// Insert or replace a user
    pub fn upsert(&self, user: User) -> Result<(), FinFlowError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        users.insert(user.login.clone(), user);
        Ok(())
    }

    /// Number of registered users
    pub fn count(&self) -> Result<usize, FinFlowError> {
        let users = self
            .users
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.len())
    }
}

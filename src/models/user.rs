//! User model
//!
//! A user is identified by a unique login and holds an opaque credential
//! compared for equality. The user's wallet is stored separately, keyed by
//! login; see `storage::wallets`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login
    pub login: String,

    /// Opaque credential, compared for equality
    password: String,
}

impl User {
    /// Create a new user
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Check a candidate password against the stored credential
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.login)
    }
}

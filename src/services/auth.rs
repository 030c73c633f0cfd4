//! Authentication service
//!
//! Registration and login against the user repository. Credentials are
//! opaque strings compared for equality; there is deliberately no hashing
//! here. The service returns the authenticated user to the caller, which
//! owns the session from then on -- there is no process-wide current user.

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::User;
use crate::storage::UserRepository;

/// Service for user registration and login
pub struct AuthService<'a> {
    users: &'a UserRepository,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(users: &'a UserRepository) -> Self {
        Self { users }
    }

    /// Whether a login is already taken
    pub fn is_registered(&self, login: &str) -> FinFlowResult<bool> {
        Ok(self.users.get(login)?.is_some())
    }

    /// Register a new user with a unique login
    pub fn register(&self, login: &str, password: &str) -> FinFlowResult<User> {
        let login = login.trim();
        if login.is_empty() {
            return Err(FinFlowError::Validation("Login cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(FinFlowError::Validation("Password cannot be empty".into()));
        }
        if self.is_registered(login)? {
            return Err(FinFlowError::duplicate_user(login));
        }

        let user = User::new(login, password);
        self.users.upsert(user.clone())?;
        self.users.save()?;
        Ok(user)
    }

    /// Authenticate by login and password
    pub fn authenticate(&self, login: &str, password: &str) -> FinFlowResult<User> {
        let user = self
            .users
            .get(login)?
            .ok_or_else(|| FinFlowError::user_not_found(login))?;

        if !user.verify_password(password) {
            return Err(FinFlowError::Auth("Invalid password".into()));
        }

        Ok(user)
    }
}

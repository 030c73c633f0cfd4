//! Category model
//!
//! A category is identified by a unique, case-sensitive name within its
//! wallet and carries a monthly budget limit. A limit of 0 means the
//! category is unmonitored: it never triggers an over-budget warning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An income/expense category with an optional monthly budget limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (unique within a wallet, never renamed)
    pub name: String,

    /// Monthly budget limit; 0 disables budget monitoring
    #[serde(default)]
    pub budget: i64,
}

impl Category {
    /// Create a new category with no budget limit
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budget: 0,
        }
    }

    /// Create a category with a budget limit
    pub fn with_budget(name: impl Into<String>, budget: i64) -> Self {
        Self {
            name: name.into(),
            budget,
        }
    }

    /// Whether a budget limit is set for this category
    pub fn is_monitored(&self) -> bool {
        self.budget > 0
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if self.budget < 0 {
            return Err(CategoryValidationError::NegativeBudget(self.budget));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBudget(i64),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NegativeBudget(budget) => {
                write!(f, "Budget limit cannot be negative (got {})", budget)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

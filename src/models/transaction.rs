//! Transaction model
//!
//! Transactions are immutable once recorded. They are created only through
//! the wallet's append operations, which validate the amount and the
//! category reference; there is no edit or delete path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// An immutable income or expense record tagged with a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    amount: i64,
    category: String,
    kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction record.
    ///
    /// Only the wallet appends transactions; it validates the amount and the
    /// category reference before calling this.
    pub(crate) fn new(amount: i64, category: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            amount,
            category: category.into(),
            kind,
        }
    }

    /// The transaction amount (always positive)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Name of the category this transaction belongs to
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Income or expense
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }
}

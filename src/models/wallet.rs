//! Wallet model
//!
//! The wallet is the aggregate root: an insertion-ordered category registry
//! plus an append-only sequence of transactions. Registry iteration order is
//! observable (users see categories in creation order in every report) and
//! must survive a save/load round trip, so the registry keeps an ordered key
//! list alongside the lookup map.
//!
//! All statistics are recomputed from the full transaction sequence on
//! demand; the wallet holds no running totals that could drift out of sync.

use std::collections::HashMap;

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{Category, Transaction, TransactionKind};

/// A user's complete ledger: category registry + transaction sequence
#[derive(Debug, Clone, Default)]
pub struct Wallet {
    /// Category names in insertion order
    order: Vec<String>,
    /// Name → category lookup, kept in sync with `order` on insert
    categories: HashMap<String, Category>,
    /// Append-only transaction ledger
    transactions: Vec<Transaction>,
}

impl Wallet {
    /// Create an empty wallet
    pub fn new() -> Self {
        Self::default()
    }

    // === Category registry ===

    /// Register a category with no budget limit.
    ///
    /// Adding a name that is already registered is a no-op: the existing
    /// category keeps its budget. Callers that care about uniqueness should
    /// check `has_category` first.
    ///
    /// Names are validated with the same rules the snapshot loader applies,
    /// so every wallet this method can build will load back from disk.
    pub fn add_category(&mut self, name: impl Into<String>) -> FinFlowResult<()> {
        let name = name.into();
        if self.categories.contains_key(&name) {
            return Ok(());
        }
        let category = Category::new(name);
        category
            .validate()
            .map_err(|e| FinFlowError::Validation(e.to_string()))?;
        self.order.push(category.name.clone());
        self.categories.insert(category.name.clone(), category);
        Ok(())
    }

    /// Set the monthly budget limit for a category.
    ///
    /// The limit is overwritten unconditionally, even below current spend:
    /// over-budget is a reportable condition, not a blocked operation.
    /// A limit of 0 disables monitoring for the category.
    pub fn set_budget(&mut self, name: &str, limit: i64) -> FinFlowResult<()> {
        if limit < 0 {
            return Err(FinFlowError::InvalidAmount(limit));
        }
        let category = self
            .categories
            .get_mut(name)
            .ok_or_else(|| FinFlowError::category_not_found(name))?;
        category.budget = limit;
        Ok(())
    }

    /// Whether a category with this exact name is registered
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Category names in insertion order (restartable on every call)
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.order.iter().filter_map(|name| self.categories.get(name))
    }

    /// The most recently registered category name, if any
    pub fn last_category_name(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    /// Number of registered categories
    pub fn category_count(&self) -> usize {
        self.order.len()
    }

    // === Transaction ledger ===

    /// Record an income transaction
    pub fn record_income(&mut self, amount: i64, category: &str) -> FinFlowResult<()> {
        self.record(amount, category, TransactionKind::Income)
    }

    /// Record an expense transaction
    pub fn record_expense(&mut self, amount: i64, category: &str) -> FinFlowResult<()> {
        self.record(amount, category, TransactionKind::Expense)
    }

    fn record(&mut self, amount: i64, category: &str, kind: TransactionKind) -> FinFlowResult<()> {
        if amount <= 0 {
            return Err(FinFlowError::InvalidAmount(amount));
        }
        if !self.has_category(category) {
            return Err(FinFlowError::category_not_found(category));
        }
        self.transactions
            .push(Transaction::new(amount, category, kind));
        Ok(())
    }

    /// All transactions in append order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Whether the wallet has no categories and no transactions
    pub fn is_empty(&self) -> bool {
        self.order.is_empty() && self.transactions.is_empty()
    }

    // === Snapshot rebuild ===

    /// Rebuild a wallet from snapshot parts.
    ///
    /// Used by the persistence adapter. Rejects the whole snapshot if any
    /// category is invalid or duplicated, or if any transaction has a
    /// non-positive amount or references an unregistered category; a wallet
    /// is never partially populated.
    pub fn from_parts(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
    ) -> FinFlowResult<Self> {
        let mut wallet = Wallet::new();

        for category in categories {
            category
                .validate()
                .map_err(|e| FinFlowError::CorruptData(e.to_string()))?;
            if wallet.has_category(&category.name) {
                return Err(FinFlowError::CorruptData(format!(
                    "duplicate category: {}",
                    category.name
                )));
            }
            wallet.order.push(category.name.clone());
            wallet.categories.insert(category.name.clone(), category);
        }

        for txn in transactions {
            if txn.amount() <= 0 {
                return Err(FinFlowError::CorruptData(format!(
                    "non-positive transaction amount: {}",
                    txn.amount()
                )));
            }
            if !wallet.has_category(txn.category()) {
                return Err(FinFlowError::CorruptData(format!(
                    "transaction references unknown category: {}",
                    txn.category()
                )));
            }
            wallet.transactions.push(txn);
        }

        Ok(wallet)
    }
}

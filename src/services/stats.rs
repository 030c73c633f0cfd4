//! Statistics service
//!
//! Pure aggregation queries over a wallet snapshot. Every figure is
//! recomputed from the full transaction sequence on each call, so totals
//! always reconcile with the ledger; nothing here performs I/O or mutates
//! the wallet.

use serde::Serialize;

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{TransactionKind, Wallet};

/// Aggregation queries over a borrowed wallet
pub struct Stats<'a> {
    wallet: &'a Wallet,
}

/// Per-category figures, in the shape reports and exports consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub name: String,
    pub income: i64,
    pub expense: i64,
    pub budget: i64,
    pub remaining: i64,
}

/// Result of a selected-categories query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSummary {
    /// Breakdown of each resolved category, in request order
    pub rows: Vec<CategoryBreakdown>,
    /// Requested names that are not registered
    pub missing: Vec<String>,
    /// Income summed over the resolved categories only
    pub total_income: i64,
    /// Expense summed over the resolved categories only
    pub total_expense: i64,
}

impl SelectedSummary {
    /// Income minus expense over the resolved categories
    pub fn balance(&self) -> i64 {
        self.total_income - self.total_expense
    }
}

impl<'a> Stats<'a> {
    /// Create a stats view over a wallet
    pub fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Sum of all transaction amounts of the given kind
    pub fn total(&self, kind: TransactionKind) -> i64 {
        self.wallet
            .transactions()
            .iter()
            .filter(|txn| txn.kind() == kind)
            .map(|txn| txn.amount())
            .sum()
    }

    /// Sum of transaction amounts of the given kind within one category.
    ///
    /// An unknown category sums to 0; this supports exploratory queries from
    /// the command layer and is deliberately not an error.
    pub fn total_for(&self, kind: TransactionKind, category: &str) -> i64 {
        self.wallet
            .transactions()
            .iter()
            .filter(|txn| txn.kind() == kind && txn.category() == category)
            .map(|txn| txn.amount())
            .sum()
    }

    /// Total income minus total expense
    pub fn balance(&self) -> i64 {
        self.total(TransactionKind::Income) - self.total(TransactionKind::Expense)
    }

    /// The budget limit of a category
    pub fn budget(&self, category: &str) -> FinFlowResult<i64> {
        self.wallet
            .category(category)
            .map(|c| c.budget)
            .ok_or_else(|| FinFlowError::category_not_found(category))
    }

    /// Budget limit minus recorded expenses for a category.
    ///
    /// Negative values signal over-budget and are surfaced as-is, never
    /// clamped to 0.
    pub fn remaining_budget(&self, category: &str) -> FinFlowResult<i64> {
        let budget = self.budget(category)?;
        Ok(budget - self.total_for(TransactionKind::Expense, category))
    }

    /// Whether a monitored category has spent past its limit.
    ///
    /// A limit of 0 means "unmonitored" and never signals over-budget,
    /// regardless of spend.
    pub fn is_over_budget(&self, category: &str) -> FinFlowResult<bool> {
        Ok(self.budget(category)? > 0 && self.remaining_budget(category)? < 0)
    }

    /// Whether total expenses exceed total income
    pub fn is_overall_overspent(&self) -> bool {
        self.total(TransactionKind::Expense) > self.total(TransactionKind::Income)
    }

    /// Full figures for one category
    pub fn breakdown(&self, category: &str) -> FinFlowResult<CategoryBreakdown> {
        let budget = self.budget(category)?;
        let income = self.total_for(TransactionKind::Income, category);
        let expense = self.total_for(TransactionKind::Expense, category);
        Ok(CategoryBreakdown {
            name: category.to_string(),
            income,
            expense,
            budget,
            remaining: budget - expense,
        })
    }

    /// Figures for every category, in registry insertion order
    pub fn all_breakdowns(&self) -> Vec<CategoryBreakdown> {
        self.wallet
            .categories()
            .map(|category| {
                let income = self.total_for(TransactionKind::Income, &category.name);
                let expense = self.total_for(TransactionKind::Expense, &category.name);
                CategoryBreakdown {
                    name: category.name.clone(),
                    income,
                    expense,
                    budget: category.budget,
                    remaining: category.budget - expense,
                }
            })
            .collect()
    }

    /// Summarize a user-selected set of categories.
    ///
    /// Unknown names are reported in `missing` and excluded from the totals.
    /// Duplicates resolve once, keeping the first occurrence. If no name
    /// resolves, the whole query fails with `NoValidCategories` rather than
    /// producing an empty (and misleading) summary.
    pub fn selected_summary<S: AsRef<str>>(&self, names: &[S]) -> FinFlowResult<SelectedSummary> {
        let mut rows = Vec::new();
        let mut missing = Vec::new();
        let mut seen = Vec::new();

        for name in names {
            let name = name.as_ref();
            if seen.iter().any(|s| s == name) {
                continue;
            }
            seen.push(name.to_string());

            if self.wallet.has_category(name) {
                rows.push(self.breakdown(name)?);
            } else {
                missing.push(name.to_string());
            }
        }

        if rows.is_empty() {
            return Err(FinFlowError::NoValidCategories);
        }

        let total_income = rows.iter().map(|row| row.income).sum();
        let total_expense = rows.iter().map(|row| row.expense).sum();

        Ok(SelectedSummary {
            rows,
            missing,
            total_income,
            total_expense,
        })
    }
}

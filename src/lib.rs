//! FinFlow - Interactive personal-finance ledger for the terminal
//!
//! This library provides the core functionality for the FinFlow application:
//! a single-user wallet of income/expense transactions tagged by category,
//! per-category monthly budgets, and the statistics derived from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (wallet, categories, transactions, users)
//! - `services`: Business logic layer (authentication, statistics)
//! - `storage`: JSON file storage layer
//! - `export`: Report builders and CSV/JSON/YAML writers
//! - `display`: Terminal formatting for statistics output
//! - `cli`: The interactive command shell
//!
//! # Example
//!
//! ```rust
//! use finflow::models::{TransactionKind, Wallet};
//! use finflow::services::stats::Stats;
//!
//! let mut wallet = Wallet::new();
//! wallet.add_category("Food")?;
//! wallet.set_budget("Food", 4000)?;
//! wallet.record_expense(800, "Food")?;
//!
//! let stats = Stats::new(&wallet);
//! assert_eq!(stats.remaining_budget("Food")?, 3200);
//! # Ok::<(), finflow::FinFlowError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinFlowError, FinFlowResult};

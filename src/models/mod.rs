//! Core data models for FinFlow
//!
//! The wallet is the aggregate root: it owns the category registry and the
//! append-only transaction ledger. Users own exactly one wallet each, keyed
//! by login.

pub mod category;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use category::Category;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
pub use wallet::Wallet;

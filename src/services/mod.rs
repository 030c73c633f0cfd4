//! Business logic layer
//!
//! Services operate over borrowed storage or wallet state; the shell owns
//! both and passes them in explicitly.

pub mod auth;
pub mod stats;

pub use auth::AuthService;
pub use stats::{CategoryBreakdown, SelectedSummary, Stats};

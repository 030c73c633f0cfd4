//! Configuration module
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::FinFlowPaths;
pub use settings::Settings;

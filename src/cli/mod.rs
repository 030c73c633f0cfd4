//! Interactive command shell
//!
//! FinFlow is driven by a line-oriented prompt: guest commands (register,
//! login) until a user signs in, then ledger commands against the session
//! wallet. The shell owns the session state and passes the wallet into core
//! operations explicitly.

pub mod shell;

pub use shell::Shell;

//! CLI command implementations
//!
//! Each command is implemented in its own module.

pub mod bundle;
pub mod checkout;
pub mod heads;
pub mod pull;

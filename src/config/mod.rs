//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (file naming, fetch limits, etc.)
//! - CLI option types and parsing
//! - The campaign parameter vocabulary

mod constants;
mod types;
mod vocabulary;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
pub use vocabulary::Vocabulary;

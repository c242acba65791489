//! Configuration management for the dispatcher
//!
//! Centralizes the handful of options the binary runs with.

use crate::cli::Args;
use serde::{Deserialize, Serialize};

/// Fallback program name when the invocation name is unavailable
pub const DEFAULT_PROGRAM: &str = "dispatch";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Program invocation name, shown in the usage message
    pub program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            program: std::env::args()
                .next()
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
        }
    }
}

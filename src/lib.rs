//! # Command Dispatcher
//!
//! A small CLI that routes its first positional token through an immutable
//! command table and hands the remaining tokens to the matching handler.
//! Handlers are stubs that echo what they received; the interesting surface
//! is the routing itself: exact-match lookup, a usage message listing the
//! registered commands, and a distinct exit status for usage errors.
//!
//! ## Example
//!
//! ```
//! use command_dispatcher::cli::commands::command_table;
//!
//! let table = command_table();
//! assert!(table.lookup("dothings").is_some());
//! assert!(table.lookup("DoThings").is_none());
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Log lines go to stderr; stdout belongs to the command handlers.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

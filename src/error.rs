//! Error types for the dispatcher
//!
//! The only anticipated failures are usage errors: the caller selected no
//! command, or selected one the table does not know.

use thiserror::Error;

/// Main error type for the dispatcher
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No command token was supplied on the command line
    #[error("no command supplied")]
    MissingCommand,

    /// The supplied command token is not a key of the command table
    #[error("unrecognized command: {name}")]
    UnknownCommand { name: String },
}

impl DispatchError {
    /// Create a new unknown-command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Whether this error should surface as the usage message
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingCommand | Self::UnknownCommand { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DispatchError>;

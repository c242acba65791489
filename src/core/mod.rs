//! Core dispatch machinery
//!
//! Contains the command table that routes an invocation to its handler.

pub mod dispatch;

pub use dispatch::{CommandTable, Handler};

//! Command table: an immutable mapping from command name to handler
//!
//! The table is built once at startup by a registration pass and never
//! mutated afterwards. Lookups are exact-match and case-sensitive.

use crate::error::Result;
use std::collections::HashMap;

/// A command handler: takes the trailing invocation tokens, in order.
/// The tokens are opaque to the dispatcher; only the handler sees them.
pub type Handler = fn(&[String]) -> Result<()>;

/// Name-to-handler mapping consulted once per invocation
#[derive(Debug, Default)]
pub struct CommandTable {
    entries: HashMap<&'static str, Handler>,
}

impl CommandTable {
    /// Create an empty command table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a handler under a command name.
    ///
    /// Keys are unique; registering a name twice replaces the earlier
    /// handler.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.entries.insert(name, handler);
    }

    /// Look up the handler for a command name.
    ///
    /// The match is exact and case-sensitive: `DoStuff` does not resolve
    /// to `dostuff`.
    pub fn lookup(&self, name: &str) -> Option<Handler> {
        self.entries.get(name).copied()
    }

    /// Registered command names, sorted for stable output
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no registered commands
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the usage message for the given program invocation name,
    /// listing every registered command.
    pub fn usage(&self, program: &str) -> String {
        let mut message = format!("Usage: {program} <command> [args...]\n\nCommands:");
        for name in self.names() {
            message.push_str("\n  ");
            message.push_str(name);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_args: &[String]) -> Result<()> {
        Ok(())
    }

    fn table_with(names: &[&'static str]) -> CommandTable {
        let mut table = CommandTable::new();
        for name in names {
            table.register(name, noop);
        }
        table
    }

    #[test]
    fn test_lookup_finds_registered_name() {
        let table = table_with(&["greet"]);
        assert!(table.lookup("greet").is_some());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = table_with(&["greet"]);
        assert!(table.lookup("Greet").is_none());
        assert!(table.lookup("GREET").is_none());
    }

    #[test]
    fn test_lookup_rejects_unknown_name() {
        let table = table_with(&["greet"]);
        assert!(table.lookup("farewell").is_none());
    }

    #[test]
    fn test_register_replaces_duplicate_key() {
        let mut table = table_with(&["greet"]);
        table.register("greet", noop);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_names_are_sorted() {
        let table = table_with(&["zeta", "alpha", "mid"]);
        assert_eq!(table.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_usage_names_program_and_commands() {
        let table = table_with(&["alpha", "beta"]);
        let usage = table.usage("prog");
        assert!(usage.starts_with("Usage: prog <command> [args...]"));
        assert!(usage.contains("\n  alpha"));
        assert!(usage.contains("\n  beta"));
    }

    #[test]
    fn test_empty_table() {
        let table = CommandTable::new();
        assert!(table.is_empty());
        assert!(table.lookup("anything").is_none());
    }
}

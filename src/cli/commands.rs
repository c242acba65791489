//! Command implementations for the CLI

use crate::{
    cli::Args,
    core::CommandTable,
    error::{DispatchError, Result},
};
use tracing::{debug, instrument};

/// Build the command table with every known command registered
pub fn command_table() -> CommandTable {
    let mut table = CommandTable::new();
    table.register("dostuff", dostuff);
    table.register("dothings", dothings);
    table
}

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(table, args))]
pub fn execute_command(table: &CommandTable, args: &Args) -> Result<()> {
    let name = args
        .command
        .as_deref()
        .ok_or(DispatchError::MissingCommand)?;

    let handler = table
        .lookup(name)
        .ok_or_else(|| DispatchError::unknown_command(name))?;

    debug!("Dispatching command: {}", name);
    handler(&args.args)
}

/// Echo the received tokens in `dostuff(...)` form
fn dostuff(args: &[String]) -> Result<()> {
    println!("dostuff({args:?})");
    Ok(())
}

/// Echo the received tokens in `dothings(...)` form
fn dothings(args: &[String]) -> Result<()> {
    println!("dothings({args:?})");
    Ok(())
}

//! Command-line argument parsing and validation

use clap::Parser;

/// Command Dispatcher - routes a command token to its handler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "dispatch")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Command to run
    pub command: Option<String>,

    /// Tokens handed to the command untouched
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

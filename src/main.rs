#![allow(clippy::cargo_common_metadata)]
use command_dispatcher::{cli, config::Config, setup_logging};

/// Exit status for usage errors, matching clap's own convention
const USAGE_EXIT_CODE: i32 = 2;

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    if let Err(err) = setup_logging(args.debug) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    // Initialize configuration
    let config = Config::from_args(&args);

    // Build the command table and dispatch
    let table = cli::command_table();
    if let Err(err) = cli::execute_command(&table, &args) {
        if err.is_usage() {
            eprintln!("{err}");
            eprintln!("{}", table.usage(&config.program));
            std::process::exit(USAGE_EXIT_CODE);
        }
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

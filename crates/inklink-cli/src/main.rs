//! inklink CLI entry point.

use std::{io, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug};

use inklink_cli::{Args, error_adapter::write_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!(log_level:?; "Starting inklink");
    debug!(args:?; "Parsed arguments");

    match inklink_cli::run(&args) {
        Ok(outcome) => debug!(outcome:?; "Completed successfully"),
        Err(err) => {
            debug!(err:?; "Run failed");
            // Nothing is left to report a failed write to
            let _ = write_report(&mut io::stderr().lock(), &err);
            process::exit(err.exit_code());
        }
    }
}

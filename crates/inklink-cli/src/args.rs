//! Command-line argument definitions for the inklink CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input path, where the result goes,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the inklink tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render mermaid blocks in markdown to mermaid.ink image URLs",
    long_about = None
)]
pub struct Args {
    /// Path to the input Markdown file
    #[arg(help = "Input markdown file")]
    pub input: String,

    /// Path to the output Markdown file (default: <input>-confluence.<ext>)
    #[arg(short, long, conflicts_with = "clipboard")]
    pub output: Option<String>,

    /// Copy output to clipboard instead of writing a file
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Path to configuration file (TOML)
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

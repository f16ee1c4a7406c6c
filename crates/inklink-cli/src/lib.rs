//! CLI logic for the inklink tool.
//!
//! This module contains the core CLI logic: it checks the input, rewrites
//! its diagram blocks and routes the result to a file or the clipboard.

pub mod error_adapter;
pub mod output;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::PathBuf};

use log::{debug, info};

use inklink::{
    InkError, Rewriter,
    clipboard::{Clipboard, SystemClipboard},
};

use output::Destination;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input held no diagram blocks; nothing was written.
    NoDiagrams,
    /// The rewritten document was written to this path.
    Written(PathBuf),
    /// The rewritten document was copied to the clipboard.
    Copied,
}

/// Run the inklink CLI application
///
/// Uses the clipboard of the platform the binary runs on.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// See [`run_with_clipboard`].
pub fn run(args: &Args) -> Result<Outcome, InkError> {
    run_with_clipboard(args, &SystemClipboard::detect())
}

/// Run the inklink CLI application with the given clipboard
///
/// This function rewrites the diagram blocks of the input file and writes the
/// result to the destination selected by `args`. When the input holds no
/// diagram blocks nothing is written.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `clipboard` - Clipboard used when `args.clipboard` is set
///
/// # Errors
///
/// Returns `InkError` for:
/// - Configuration loading errors
/// - A missing input file
/// - File I/O errors
/// - Clipboard errors
pub fn run_with_clipboard(args: &Args, clipboard: &impl Clipboard) -> Result<Outcome, InkError> {
    debug!(input_path = args.input; "Processing document");

    let app_config = config::load_config(args.config.as_ref())?;

    let input = PathBuf::from(&args.input);
    if !input.is_file() {
        return Err(InkError::InputNotFound(input));
    }

    let source = fs::read_to_string(&input)?;

    let rewrite = Rewriter::new(app_config.render().clone()).rewrite(&source);
    if rewrite.is_empty() {
        info!("No mermaid blocks found.");
        return Ok(Outcome::NoDiagrams);
    }

    match Destination::from_args(args, app_config.output().suffix()) {
        Destination::Clipboard => {
            clipboard.copy(rewrite.document())?;
            info!("Done. Output copied to clipboard.");
            Ok(Outcome::Copied)
        }
        Destination::File(path) => {
            fs::write(&path, rewrite.into_document())?;
            info!(output_path = path.display().to_string(); "Done. Output written to: {}", path.display());
            Ok(Outcome::Written(path))
        }
    }
}

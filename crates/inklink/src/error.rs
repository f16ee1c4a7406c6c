//! Error types for inklink operations.
//!
//! This module provides the main error type [`InkError`] which wraps
//! the conditions that can end a single rewrite invocation.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for inklink operations.
///
/// Every variant is terminal for the invocation. [`InkError::exit_code`]
/// maps each variant to the process exit status the CLI reports.
#[derive(Debug, Error)]
pub enum InkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{} not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("Clipboard not supported on this OS ({platform})")]
    UnsupportedClipboard { platform: String },

    #[error("Failed to start clipboard command `{program}`: {source}")]
    ClipboardSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Clipboard command `{program}` failed{}", exit_suffix(.code))]
    ClipboardCommand { program: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl InkError {
    /// Process exit code for this error.
    ///
    /// A failing clipboard command propagates its own exit code. A command
    /// terminated without one (e.g. by a signal) and every other variant
    /// map to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ClipboardCommand {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " without an exit code".to_string(),
    }
}

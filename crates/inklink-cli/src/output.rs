//! Output routing for the rewritten document.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::Args;

/// Where the rewritten document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write to this file.
    File(PathBuf),
    /// Copy to the system clipboard.
    Clipboard,
}

impl Destination {
    /// Resolves the destination from the command-line flags.
    ///
    /// `--clipboard` wins, then an explicit `--output`, and otherwise the
    /// path derived from the input with [`default_output_path`].
    pub fn from_args(args: &Args, suffix: &str) -> Self {
        if args.clipboard {
            return Self::Clipboard;
        }
        match &args.output {
            Some(output) => Self::File(PathBuf::from(output)),
            None => Self::File(default_output_path(&args.input, suffix)),
        }
    }
}

/// Inserts `suffix` between the file stem and the extension of `input`.
///
/// ```
/// # use std::path::PathBuf;
/// # use inklink_cli::output::default_output_path;
/// assert_eq!(
///     default_output_path("notes.md", "-confluence"),
///     PathBuf::from("notes-confluence.md")
/// );
/// ```
pub fn default_output_path(input: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let input = input.as_ref();

    let mut file_name = OsString::new();
    if let Some(stem) = input.file_stem() {
        file_name.push(stem);
    }
    file_name.push(suffix);
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    input.with_file_name(file_name)
}

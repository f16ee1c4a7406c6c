//! Clipboard providers backed by platform copy commands.
//!
//! macOS uses `pbcopy` and Linux uses `xclip -selection clipboard`. Any other
//! platform resolves to [`SystemClipboard::Unsupported`], which fails before
//! spawning anything.

use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use log::{debug, info};

use crate::InkError;

/// Something the rewritten document can be copied into.
pub trait Clipboard {
    /// Copies `text` to the clipboard, blocking until the copy has finished.
    ///
    /// # Errors
    ///
    /// Returns an [`InkError`] if the clipboard is unavailable or the copy
    /// fails.
    fn copy(&self, text: &str) -> Result<(), InkError>;
}

/// The host clipboard, selected by operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemClipboard {
    /// `pbcopy`
    MacOs,
    /// `xclip -selection clipboard`
    Linux,
    /// No known copy command for this platform.
    Unsupported { platform: String },
}

impl SystemClipboard {
    /// Selects the provider for the platform this binary was built for.
    pub fn detect() -> Self {
        Self::for_platform(env::consts::OS)
    }

    /// Selects the provider for `os`, using the names of [`std::env::consts::OS`].
    pub fn for_platform(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            other => Self::Unsupported {
                platform: other.to_string(),
            },
        }
    }

    /// Platform name in the form of [`std::env::consts::OS`].
    pub fn platform(&self) -> &str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Unsupported { platform } => platform,
        }
    }

    /// Program and arguments of the copy command, if the platform has one.
    pub fn command(&self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            Self::MacOs => Some(("pbcopy", &[])),
            Self::Linux => Some(("xclip", &["-selection", "clipboard"])),
            Self::Unsupported { .. } => None,
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), InkError> {
        let (program, args) = self
            .command()
            .ok_or_else(|| InkError::UnsupportedClipboard {
                platform: self.platform().to_string(),
            })?;

        pipe_to_command(program, args, text)?;

        info!(program; "Copied to clipboard");
        Ok(())
    }
}

/// Runs `program` with `args`, writes `text` to its stdin and waits for it.
///
/// The child is always waited on. A non-zero exit wins over a failed write,
/// since a command that quits early closes the pipe under the writer.
fn pipe_to_command(program: &str, args: &[&str], text: &str) -> Result<(), InkError> {
    debug!(program, bytes = text.len(); "Spawning clipboard command");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|source| InkError::ClipboardSpawn {
            program: program.to_string(),
            source,
        })?;

    let Some(mut stdin) = child.stdin.take() else {
        // Reaping is best effort; the missing handle is the error reported.
        let _ = child.kill();
        let _ = child.wait();
        return Err(InkError::Io(io::Error::other(format!(
            "stdin of clipboard command `{program}` was not captured"
        ))));
    };

    let written = stdin.write_all(text.as_bytes());
    // The copy command reads until EOF
    drop(stdin);

    let status = child.wait()?;
    if !status.success() {
        return Err(InkError::ClipboardCommand {
            program: program.to_string(),
            code: status.code(),
        });
    }

    written?;
    Ok(())
}

//! Error adapter for converting InkError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's [`Diagnostic`](MietteDiagnostic) trait, and renders the
//! result as the single line the CLI prints on failure.

use std::{
    fmt,
    io::{self, Write},
};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use inklink::InkError;

/// Adapter giving an [`InkError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a InkError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            InkError::Io(_) => "inklink::io",
            InkError::InputNotFound(_) => "inklink::input",
            InkError::UnsupportedClipboard { .. }
            | InkError::ClipboardSpawn { .. }
            | InkError::ClipboardCommand { .. } => "inklink::clipboard",
            InkError::Config(_) => "inklink::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            InkError::UnsupportedClipboard { .. } => "Use -o instead.",
            InkError::ClipboardSpawn { .. } => {
                "Install the clipboard program or use -o instead."
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Render an [`InkError`] as one line: `error[<code>]: <message>`, followed
/// by the help text if any.
pub fn render_line(err: &InkError) -> String {
    let adapter = ErrorAdapter(err);

    let mut line = match adapter.code() {
        Some(code) => format!("error[{code}]: {adapter}"),
        None => format!("error: {adapter}"),
    };
    if let Some(help) = adapter.help() {
        line.push_str(&format!(". {help}"));
    }
    line
}

/// Write the rendered error line to `writer`.
///
/// The CLI reports fatal errors through this rather than the logger, so the
/// line is printed whatever `--log-level` says.
///
/// # Errors
///
/// Returns any error from `writer`.
pub fn write_report(writer: &mut impl Write, err: &InkError) -> io::Result<()> {
    writeln!(writer, "{}", render_line(err))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_missing_input() {
        let err = InkError::InputNotFound(PathBuf::from("notes.md"));

        assert_eq!(render_line(&err), "error[inklink::input]: notes.md not found");
    }

    #[test]
    fn test_unsupported_clipboard_has_help() {
        let err = InkError::UnsupportedClipboard {
            platform: "windows".to_string(),
        };

        assert_eq!(
            render_line(&err),
            "error[inklink::clipboard]: Clipboard not supported on this OS (windows). Use -o instead."
        );
    }

    #[test]
    fn test_rendered_error_is_single_line() {
        let errors = [
            InkError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            InkError::ClipboardSpawn {
                program: "xclip".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            },
            InkError::ClipboardCommand {
                program: "xclip".to_string(),
                code: Some(2),
            },
            InkError::Config("output.suffix must not be empty".to_string()),
        ];

        for err in &errors {
            let line = render_line(err);
            assert!(!line.contains('\n'), "multi-line output: {line:?}");
            assert!(line.starts_with("error[inklink::"), "unexpected: {line}");
        }
    }

    #[test]
    fn test_source_is_forwarded() {
        let err = InkError::ClipboardSpawn {
            program: "pbcopy".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };

        let adapter = ErrorAdapter(&err);
        assert!(std::error::Error::source(&adapter).is_some());
    }

    #[test]
    fn test_write_report_emits_one_line() {
        let err = InkError::ClipboardCommand {
            program: "xclip".to_string(),
            code: Some(3),
        };
        let mut buffer = Vec::new();

        write_report(&mut buffer, &err).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "error[inklink::clipboard]: Clipboard command `xclip` failed with exit code 3\n"
        );
    }
}

//! Block detection and substitution.
//!
//! A diagram block opens with ```` ```mermaid ````, optional whitespace and a
//! line break, and closes at the next ```` ``` ````. Everything outside the
//! matched spans is copied through untouched.

use std::{fmt, ops::Range, sync::LazyLock};

use log::{debug, info, trace};
use regex::Regex;

use crate::{config::RenderConfig, encode::diagram_url};

/// Fenced Mermaid block with its payload in capture group 1.
///
/// The payload match is non-greedy, so a document with several blocks yields
/// one match per block. A block without a closing fence never matches.
static MERMAID_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```mermaid\s*\n(.*?)```").expect("Invalid regex pattern for mermaid blocks")
});

/// A fenced diagram block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock<'a> {
    span: Range<usize>,
    payload: &'a str,
}

impl<'a> DiagramBlock<'a> {
    /// Byte range of the whole block, fences included.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Raw diagram source between the opening line break and the closing fence.
    pub fn payload(&self) -> &'a str {
        self.payload
    }
}

/// Markdown image that replaces a [`DiagramBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReference {
    alt_text: String,
    url: String,
}

impl RenderedReference {
    /// Returns the image URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the image alt text.
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

impl fmt::Display for RenderedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "![{}]({})", self.alt_text, self.url)
    }
}

/// Result of rewriting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    document: String,
    converted: usize,
}

impl Rewrite {
    /// Returns the rewritten document.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Consumes the rewrite and returns the rewritten document.
    pub fn into_document(self) -> String {
        self.document
    }

    /// Number of diagram blocks that were replaced.
    pub fn converted(&self) -> usize {
        self.converted
    }

    /// Returns `true` if the document contained no diagram blocks.
    pub fn is_empty(&self) -> bool {
        self.converted == 0
    }
}

/// Finds every diagram block in `document`, in document order.
pub fn find_blocks(document: &str) -> Vec<DiagramBlock<'_>> {
    MERMAID_BLOCK_PATTERN
        .captures_iter(document)
        .filter_map(|caps| {
            let block = caps.get(0)?;
            let payload = caps.get(1)?;
            Some(DiagramBlock {
                span: block.range(),
                payload: payload.as_str(),
            })
        })
        .collect()
}

/// Replaces diagram blocks with rendered references.
///
/// # Examples
///
/// ```
/// use inklink::Rewriter;
///
/// let rewriter = Rewriter::default();
/// let rewrite = rewriter.rewrite("Intro\n```mermaid\ngraph TD; A-->B```\nOutro\n");
///
/// assert_eq!(
///     rewrite.document(),
///     "Intro\n![diagram](https://mermaid.ink/img/Z3JhcGggVEQ7IEEtLT5C)\nOutro\n"
/// );
/// assert_eq!(rewrite.converted(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Rewriter {
    config: RenderConfig,
}

impl Rewriter {
    /// Create a new rewriter with the given render configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Builds the rendered reference for a single block.
    pub fn reference(&self, block: &DiagramBlock<'_>) -> RenderedReference {
        RenderedReference {
            alt_text: self.config.alt_text().to_string(),
            url: diagram_url(self.config.endpoint(), block.payload()),
        }
    }

    /// Rewrites every diagram block in `document`.
    ///
    /// Text outside the blocks is copied byte-for-byte in its original order.
    /// When no block is found the returned [`Rewrite`] holds an unchanged copy
    /// of the document and [`Rewrite::is_empty`] is `true`.
    pub fn rewrite(&self, document: &str) -> Rewrite {
        let blocks = find_blocks(document);
        let total = blocks.len();

        if total == 0 {
            debug!("No diagram blocks matched");
            return Rewrite {
                document: document.to_string(),
                converted: 0,
            };
        }

        info!(blocks = total; "Found {total} mermaid block(s). Converting...");

        let mut output = String::with_capacity(document.len());
        let mut cursor = 0;

        for (index, block) in blocks.iter().enumerate() {
            let span = block.span();
            output.push_str(&document[cursor..span.start]);

            let reference = self.reference(block);
            trace!(url = reference.url(); "Rendered reference");
            output.push_str(&reference.to_string());

            cursor = span.end;
            info!("  Converted diagram {}/{total}", index + 1);
        }

        output.push_str(&document[cursor..]);

        Rewrite {
            document: output,
            converted: total,
        }
    }
}

//! inklink - Rewrite Mermaid code blocks into mermaid.ink image links.
//!
//! Each ```` ```mermaid ```` block of a Markdown document is replaced by a
//! Markdown image whose URL carries the diagram source, encoded as URL-safe
//! base64, so the hosted renderer draws it on demand. Nothing is rendered
//! or fetched locally.
//!
//! # Examples
//!
//! ```
//! use inklink::{Rewriter, config::AppConfig};
//!
//! let config = AppConfig::default();
//! let rewriter = Rewriter::new(config.render().clone());
//!
//! let rewrite = rewriter.rewrite("```mermaid\ngraph TD; A-->B```\n");
//! assert_eq!(
//!     rewrite.document(),
//!     "![diagram](https://mermaid.ink/img/Z3JhcGggVEQ7IEEtLT5C)\n"
//! );
//! ```

pub mod clipboard;
pub mod config;

mod encode;
mod error;
mod rewrite;

pub use encode::{diagram_url, encode_payload};
pub use error::InkError;
pub use rewrite::{DiagramBlock, RenderedReference, Rewrite, Rewriter, find_blocks};

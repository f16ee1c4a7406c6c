//! Configuration types for diagram link rendering.
//!
//! This module provides configuration structures that control how rendered
//! references are built and where the CLI writes its output. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and output settings.
//! - [`RenderConfig`] - Controls the rendering endpoint and the image alt text.
//! - [`OutputConfig`] - Controls the suffix used to derive the default output path.
//!
//! # Example
//!
//! ```
//! # use inklink::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().endpoint(), "https://mermaid.ink/img/");
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use crate::InkError;

/// Base URL of the hosted mermaid.ink image endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://mermaid.ink/img/";

/// Alt text used for every rendered reference.
pub const DEFAULT_ALT_TEXT: &str = "diagram";

/// Suffix inserted before the input extension to derive the output path.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-confluence";

/// Top-level application configuration combining render and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and output configurations.
    ///
    /// # Arguments
    ///
    /// * `render` - Endpoint and alt text settings.
    /// * `output` - Output path settings.
    pub fn new(render: RenderConfig, output: OutputConfig) -> Self {
        Self { render, output }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::Config`] if the endpoint is empty, or if the
    /// output suffix is empty (the default output path would then overwrite
    /// the input file).
    pub fn validate(&self) -> Result<(), InkError> {
        if self.render.endpoint.trim().is_empty() {
            return Err(InkError::Config(
                "render.endpoint must not be empty".to_string(),
            ));
        }
        if self.output.suffix.is_empty() {
            return Err(InkError::Config(
                "output.suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for building rendered references.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// URL prefix the encoded payload is appended to.
    endpoint: String,

    /// Alt text of the emitted Markdown image.
    alt_text: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            alt_text: DEFAULT_ALT_TEXT.to_string(),
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL prefix, e.g. `https://mermaid.ink/img/`.
    /// * `alt_text` - Alt text of the emitted image.
    pub fn new(endpoint: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Returns the endpoint URL prefix.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the image alt text.
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Settings for the derived default output path.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the given suffix.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Returns the suffix inserted before the input file extension.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

//! Output sink traits and types
//!
//! This module defines the section record written for every discovered link
//! and the trait interface for anything that can receive those records.

use std::fmt;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output file {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// What was recorded for a single linked page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Whitespace-normalized visible text of the page
    Text(String),

    /// The response did not declare an HTML content type
    SkippedNonHtml,

    /// The page was HTML but contained no visible text
    NoReadableText,

    /// The fetch failed; holds the human-readable failure description
    FetchError(String),
}

impl SectionBody {
    /// Builds the body for a successfully extracted page
    ///
    /// Empty text collapses to the no-readable-text marker.
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            Self::NoReadableText
        } else {
            Self::Text(text)
        }
    }

    /// Returns true if this body records a failed fetch
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchError(_))
    }
}

impl fmt::Display for SectionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::SkippedNonHtml => f.write_str("[Skipped: non-HTML content]"),
            Self::NoReadableText => f.write_str("[No readable text]"),
            Self::FetchError(description) => {
                write!(f, "[Error fetching link: {}]", description)
            }
        }
    }
}

/// One output record: a discovered link and what came of fetching it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The link as discovered on the starting page
    pub url: String,

    /// Extracted text or a marker
    pub body: SectionBody,
}

impl Section {
    /// Creates a new section
    pub fn new(url: impl Into<String>, body: SectionBody) -> Self {
        Self {
            url: url.into(),
            body,
        }
    }
}

/// Trait for output sinks
///
/// Sections arrive one at a time in discovery order. A sink must make each
/// section durable before returning so that a later failure never damages
/// what was already written.
pub trait SectionSink {
    /// Appends one section to the output
    ///
    /// # Arguments
    ///
    /// * `section` - The section to write
    fn write_section(&mut self, section: &Section) -> OutputResult<()>;

    /// Finalizes the output, flushing anything still buffered
    fn finalize(&mut self) -> OutputResult<()>;
}

//! Web-Spider: a one-hop link text collector
//!
//! This crate fetches a starting page, follows every link found on it exactly
//! once, extracts the visible text of each linked page and writes all results
//! to a single plain-text file.

pub mod config;
pub mod crawler;
pub mod output;

use crate::crawler::FetchError;
use crate::output::OutputError;
use thiserror::Error;

/// Main error type for Web-Spider operations
///
/// Only conditions that abort a whole run end up here. Problems with an
/// individual linked page are recorded as output sections instead.
#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid starting URL '{url}': {reason}")]
    InvalidStartUrl { url: String, reason: String },

    #[error("Failed to fetch starting page {url}: {source}")]
    BaseFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("No links found on the starting page: {url}")]
    NoLinksFound { url: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Web-Spider operations
pub type Result<T> = std::result::Result<T, SpiderError>;

// Re-export commonly used types
pub use config::SpiderConfig;
pub use crawler::{crawl_once, extract_links, extract_text, CrawlReport, Fetcher};
pub use output::{Section, SectionBody};

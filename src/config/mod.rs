//! Configuration module for Web-Spider
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a built-in default, so a run without a
//! config file behaves exactly like one with an empty file.
//!
//! # Example
//!
//! ```no_run
//! use web_spider::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("spider.toml")).unwrap();
//! println!("Request timeout: {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    FetchConfig, OutputConfig, SpiderConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_OUTPUT_PATH,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config, resolve_output_path};
pub use validation::validate;

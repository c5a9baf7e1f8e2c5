//! Output module for writing crawl results
//!
//! This module handles:
//! - The section record produced for every discovered link
//! - Writing sections to the plain-text output file
//! - Recording per-run crawl statistics

pub mod stats;
mod text_file;
mod traits;

pub use stats::{log_statistics, CrawlStatistics};
pub use text_file::{format_section, TextFileOutput};
pub use traits::{OutputError, OutputResult, Section, SectionBody, SectionSink};

//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a fixed timeout and user agent
//! - Link extraction from the starting page
//! - Visible text extraction from linked pages
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod text;

pub use coordinator::{parse_start_url, run_crawl, section_body, Coordinator, CrawlReport};
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher};
pub use parser::{extract_links, extract_links_from_document};
pub use text::{extract_text, extract_text_from_document};

use crate::config::SpiderConfig;
use crate::SpiderError;

/// Runs a complete one-hop crawl
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Fetch the starting page and extract its links
/// 3. Fetch every link and extract its visible text
/// 4. Write one section per link to the output file
///
/// # Arguments
///
/// * `config` - The spider configuration
/// * `start_url` - The page whose links are followed
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed successfully
/// * `Err(SpiderError)` - Crawl was aborted
pub async fn crawl_once(
    config: &SpiderConfig,
    start_url: &str,
) -> Result<CrawlReport, SpiderError> {
    run_crawl(config, start_url).await
}

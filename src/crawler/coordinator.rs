//! Crawler coordinator - one-hop crawl orchestration
//!
//! A run moves through fixed phases:
//! - fetch the starting page (failure aborts the run)
//! - extract its links (none found aborts the run)
//! - fetch every link in discovery order, turning each outcome into a section
//! - finalize the output
//!
//! Nothing that happens to an individual link can abort the run.

use crate::config::{resolve_output_path, FetchConfig, SpiderConfig};
use crate::crawler::fetcher::{FetchError, FetchedPage, Fetcher};
use crate::crawler::parser::extract_links;
use crate::crawler::text::extract_text;
use crate::output::{
    log_statistics, CrawlStatistics, Section, SectionBody, SectionSink, TextFileOutput,
};
use crate::SpiderError;
use std::path::PathBuf;
use url::Url;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Absolute path of the written output file
    pub output_path: PathBuf,

    /// What happened to the discovered links
    pub statistics: CrawlStatistics,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    fetcher: Fetcher,
}

impl Coordinator {
    /// Creates a new coordinator with its own HTTP client
    ///
    /// # Arguments
    ///
    /// * `config` - The fetch configuration used for every request of the run
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SpiderError)` - The HTTP client could not be built
    pub fn new(config: &FetchConfig) -> Result<Self, SpiderError> {
        Ok(Self::with_fetcher(Fetcher::new(config)?))
    }

    /// Creates a coordinator around an existing fetcher
    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Fetches the starting page and returns the links found on it
    ///
    /// Links are resolved against the starting URL as given, not against the
    /// final URL after redirects.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - At least one link, in discovery order
    /// * `Err(SpiderError::InvalidStartUrl)` - The URL is not absolute http(s)
    /// * `Err(SpiderError::BaseFetch)` - The starting page could not be fetched
    /// * `Err(SpiderError::NoLinksFound)` - The page has no usable links
    pub async fn discover_links(&self, start_url: &str) -> Result<Vec<String>, SpiderError> {
        let base_url = parse_start_url(start_url)?;

        tracing::info!("Fetching starting page {}", base_url);
        let page = self
            .fetcher
            .fetch(base_url.as_str())
            .await
            .map_err(|source| SpiderError::BaseFetch {
                url: start_url.to_string(),
                source,
            })?;

        let links = extract_links(&base_url, &page.html());
        if links.is_empty() {
            return Err(SpiderError::NoLinksFound {
                url: start_url.to_string(),
            });
        }

        tracing::info!("Found {} links on {}", links.len(), base_url);
        Ok(links)
    }

    /// Fetches one link and turns the outcome into a section
    ///
    /// Never fails: fetch errors become error sections.
    pub async fn process_link(&self, link: &str) -> Section {
        tracing::debug!("Fetching {}", link);

        let result = self.fetcher.fetch(link).await;
        match &result {
            Err(e) if e.status().is_some() => tracing::info!("Dead link {}: {}", link, e),
            Err(e) => tracing::warn!("Failed to fetch {}: {}", link, e),
            Ok(page) if page.url != link => {
                tracing::debug!("{} redirected to {}", link, page.url)
            }
            Ok(_) => {}
        }

        Section::new(link, section_body(result))
    }

    /// Processes every link in order, writing each section as soon as it exists
    ///
    /// # Arguments
    ///
    /// * `links` - The discovered links
    /// * `sink` - Destination for the sections
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlStatistics)` - Every link produced a section
    /// * `Err(SpiderError::Output)` - Writing to the sink failed
    pub async fn crawl_links<S: SectionSink>(
        &self,
        links: &[String],
        sink: &mut S,
    ) -> Result<CrawlStatistics, SpiderError> {
        let mut statistics = CrawlStatistics::new(links.len());

        for (index, link) in links.iter().enumerate() {
            let section = self.process_link(link).await;
            statistics.record(&section.body);
            sink.write_section(&section)?;

            tracing::debug!(
                "Processed link {}/{}: {}{}",
                index + 1,
                links.len(),
                link,
                if section.body.is_error() { " (error)" } else { "" }
            );
        }

        sink.finalize()?;

        Ok(statistics)
    }
}

/// Maps a fetch outcome to the body recorded for it
///
/// | Outcome | Body |
/// |---------|------|
/// | Fetch failed | `FetchError(description)` |
/// | Content-Type without "html" | `SkippedNonHtml` |
/// | HTML without visible text | `NoReadableText` |
/// | HTML with visible text | `Text` |
pub fn section_body(result: Result<FetchedPage, FetchError>) -> SectionBody {
    match result {
        Err(e) => SectionBody::FetchError(e.to_string()),
        Ok(page) if !page.is_html() => SectionBody::SkippedNonHtml,
        Ok(page) => SectionBody::from_text(extract_text(&page.html())),
    }
}

/// Parses the starting URL, accepting only absolute http(s) URLs
pub fn parse_start_url(raw: &str) -> Result<Url, SpiderError> {
    let url = Url::parse(raw.trim()).map_err(|e| SpiderError::InvalidStartUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(SpiderError::InvalidStartUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

/// Runs a complete one-hop crawl and writes the output file
///
/// The output file is only created once links have been discovered, so the
/// two fatal conditions leave any existing file untouched.
///
/// # Arguments
///
/// * `config` - The spider configuration; `config.output.path` names the file
/// * `start_url` - The page whose links are followed
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; every link has a section
/// * `Err(SpiderError)` - The run was aborted
pub async fn run_crawl(
    config: &SpiderConfig,
    start_url: &str,
) -> Result<CrawlReport, SpiderError> {
    let output_path = resolve_output_path(&config.output.path)?;
    let coordinator = Coordinator::new(&config.fetch)?;

    let links = coordinator.discover_links(start_url).await?;

    tracing::info!("Writing sections to {}", output_path.display());
    let mut output = TextFileOutput::create(&output_path)?;
    let statistics = coordinator.crawl_links(&links, &mut output).await?;
    tracing::info!(
        "Wrote {} sections to {}",
        output.sections_written(),
        output_path.display()
    );

    log_statistics(&statistics);

    Ok(CrawlReport {
        output_path,
        statistics,
    })
}

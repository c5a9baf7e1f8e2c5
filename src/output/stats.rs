//! Per-run crawl statistics
//!
//! Counts what happened to every discovered link so the end of a run can be
//! summarized in the log.

use crate::output::traits::SectionBody;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Links discovered on the starting page
    pub links_discovered: u64,

    /// Pages whose visible text was written
    pub pages_with_text: u64,

    /// Pages skipped for a non-HTML content type
    pub skipped_non_html: u64,

    /// HTML pages without any visible text
    pub no_readable_text: u64,

    /// Links whose fetch failed
    pub fetch_errors: u64,
}

impl CrawlStatistics {
    /// Creates statistics for a run over `links_discovered` links
    pub fn new(links_discovered: usize) -> Self {
        Self {
            links_discovered: links_discovered as u64,
            ..Self::default()
        }
    }

    /// Records the outcome of one link
    pub fn record(&mut self, body: &SectionBody) {
        match body {
            SectionBody::Text(_) => self.pages_with_text += 1,
            SectionBody::SkippedNonHtml => self.skipped_non_html += 1,
            SectionBody::NoReadableText => self.no_readable_text += 1,
            SectionBody::FetchError(_) => self.fetch_errors += 1,
        }
    }

    /// Number of sections recorded so far
    pub fn sections_recorded(&self) -> u64 {
        self.pages_with_text + self.skipped_non_html + self.no_readable_text + self.fetch_errors
    }

    /// Returns the share of links with extracted text as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.sections_recorded();
        if total == 0 {
            return 0.0;
        }
        (self.pages_with_text as f64 / total as f64) * 100.0
    }
}

/// Logs statistics at info level
///
/// # Arguments
///
/// * `stats` - The statistics to report
pub fn log_statistics(stats: &CrawlStatistics) {
    tracing::info!(
        "Crawl statistics: {} links, {} with text, {} non-HTML, {} without text, {} errors",
        stats.links_discovered,
        stats.pages_with_text,
        stats.skipped_non_html,
        stats.no_readable_text,
        stats.fetch_errors
    );
    tracing::info!(
        "Success rate: {:.1}% ({} / {} links yielded text)",
        stats.success_rate(),
        stats.pages_with_text,
        stats.sections_recorded()
    );
}

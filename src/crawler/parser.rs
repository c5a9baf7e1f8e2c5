//! HTML parser for extracting links
//!
//! Anchors are read in document order; each href is trimmed, stripped of its
//! fragment, resolved against the page URL and kept only if it is http(s) and
//! not already seen on this page.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts unique absolute http/https links from an HTML document
///
/// # Link Extraction Rules
///
/// **Include:**
/// - every `<a href="...">`, resolved against `base_url`
///
/// **Exclude:**
/// - hrefs that are empty once the fragment is removed (`#top`, `""`)
/// - any scheme other than `http` and `https` (`mailto:`, `javascript:`, ...)
/// - relative hrefs that cannot be resolved to a URL
/// - repeats of a link already returned; the first occurrence keeps its place
///
/// Malformed markup is parsed on a best-effort basis and never fails.
///
/// # Arguments
///
/// * `base_url` - The URL the document was fetched from
/// * `html` - The HTML content
///
/// # Returns
///
/// Links in order of first appearance; possibly empty
///
/// # Example
///
/// ```
/// use web_spider::crawler::extract_links;
/// use url::Url;
///
/// let html = r##"<a href="/a">A</a><a href="/a">dup</a><a href="#x">frag</a>"##;
/// let base_url = Url::parse("http://ex.com/").unwrap();
/// assert_eq!(extract_links(&base_url, html), vec!["http://ex.com/a".to_string()]);
/// ```
pub fn extract_links(base_url: &Url, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    extract_links_from_document(&document, base_url)
}

/// Extracts links from an already parsed document
pub fn extract_links_from_document(document: &Html, base_url: &Url) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(absolute_url) = resolve_link(href, base_url) {
            if seen.insert(absolute_url.clone()) {
                links.push(absolute_url);
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
///
/// Resolved URLs are returned in their normalized serialization (lowercase
/// scheme and host, default port dropped, percent-encoded path), so spellings
/// of the same URL deduplicate to one link.
///
/// An absolute http(s) href that does not parse is returned verbatim; the
/// fetch then fails and the failure is recorded for that link.
///
/// Returns None if the link should be excluded:
/// - Empty after trimming and fragment removal
/// - Unparseable relative or non-HTTP(S) hrefs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = strip_fragment(href.trim());

    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => match absolute_url.scheme() {
            "http" | "https" => Some(absolute_url.to_string()),
            _ => None,
        },
        Err(_) if is_http_like(href) => Some(href.to_string()),
        Err(_) => None,
    }
}

fn is_http_like(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Drops everything from the first `#` onwards
fn strip_fragment(href: &str) -> &str {
    href.split_once('#').map_or(href, |(before, _)| before)
}

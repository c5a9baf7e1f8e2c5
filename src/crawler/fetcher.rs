//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the spider, including:
//! - Building the HTTP client from the immutable fetch configuration
//! - GET requests returning the raw body and declared Content-Type
//! - Redirect handling with an explicit hop limit
//! - Error classification into human-readable descriptions

use crate::config::FetchConfig;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;

/// Reasons a fetch can fail
///
/// The `Display` text is what ends up in the output file, so it stays short
/// and free of internal detail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for url: {url}")]
    Status { status: StatusCode, url: String },

    #[error("request timed out after {timeout_secs}s for url: {url}")]
    Timeout { timeout_secs: u64, url: String },

    #[error("connection failed for url: {url}")]
    Connect { url: String },

    #[error("redirect error for url: {url} (loop or more than {max_redirects} redirects)")]
    Redirect { max_redirects: usize, url: String },

    #[error("request failed for url: {url}: {message}")]
    Request { url: String, message: String },

    #[error("failed to read response body for url: {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    /// Returns the HTTP status code if the server answered with a non-2xx status
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A successfully fetched response
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,

    /// Content-Type header value, empty if absent
    pub content_type: String,

    /// Raw response body
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Returns true if the declared content type mentions HTML
    pub fn is_html(&self) -> bool {
        self.content_type.to_ascii_lowercase().contains("html")
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences
    pub fn html(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use web_spider::config::FetchConfig;
/// use web_spider::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .connect_timeout(config.timeout().min(Duration::from_secs(10)))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues GET requests with a fixed client configuration
///
/// One fetcher lives for exactly one crawl; there are no retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout_secs: u64,
    max_redirects: usize,
}

impl Fetcher {
    /// Creates a fetcher from the fetch configuration
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            timeout_secs: config.timeout_secs,
            max_redirects: config.max_redirects,
        })
    }

    /// Fetches a URL and returns its body and declared content type
    ///
    /// # Request Flow
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | HTTP 2xx | `Ok(FetchedPage)` |
    /// | Any other final status | `FetchError::Status` |
    /// | Timeout (connect, headers or body) | `FetchError::Timeout` |
    /// | Connection refused, DNS or TLS failure | `FetchError::Connect` |
    /// | Redirect loop or too many hops | `FetchError::Redirect` |
    /// | Malformed URL, other transport errors | `FetchError::Request` |
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to fetch
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let final_url = response.url().to_string();
        let content_type = content_type_of(response.headers());

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(url, e)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        Ok(FetchedPage {
            url: final_url,
            content_type,
            body: body.to_vec(),
        })
    }

    /// Maps a transport error to a fetch error
    fn classify(&self, url: &str, e: reqwest::Error) -> FetchError {
        let url = url.to_string();

        if e.is_timeout() {
            FetchError::Timeout {
                timeout_secs: self.timeout_secs,
                url,
            }
        } else if e.is_redirect() {
            FetchError::Redirect {
                max_redirects: self.max_redirects,
                url,
            }
        } else if e.is_connect() {
            FetchError::Connect { url }
        } else {
            FetchError::Request {
                url,
                message: e.to_string(),
            }
        }
    }
}

/// Reads the Content-Type header, decoding non-ASCII bytes lossily
///
/// A missing header yields an empty string.
fn content_type_of(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

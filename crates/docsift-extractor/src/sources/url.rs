//! Web pages fetched over HTTP(S)

use crate::error::ExtractError;
use docsift_domain::{InputReference, TextExtractor};
use scraper::Html;
use std::time::Duration;
use tracing::debug;

/// Elements whose text is never page content
const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

const USER_AGENT: &str = concat!("docsift/", env!("CARGO_PKG_VERSION"));

/// Fetches a page and reduces its markup to readable text
pub struct UrlExtractor {
    client: reqwest::blocking::Client,
}

impl UrlExtractor {
    /// Create an extractor whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, ExtractError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ExtractError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl TextExtractor for UrlExtractor {
    type Error = ExtractError;

    fn extract(&self, source: &InputReference) -> Result<String, Self::Error> {
        let url = source.as_str();
        let http_error = |e: reqwest::Error| ExtractError::Http {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().map_err(http_error)?;
        debug!(url, bytes = html.len(), "Fetched page");

        Ok(html_to_text(&html))
    }
}

/// Extract readable text from an HTML document
///
/// Text inside `script`, `style` and `noscript` is dropped. The remaining
/// text nodes are joined by newlines and passed through [`clean_text`].
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let pieces: Vec<&str> = document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            });
            (!hidden).then_some(&**text)
        })
        .collect();

    clean_text(&pieces.join("\n"))
}

/// Normalise whitespace in extracted page text
///
/// Each line is trimmed and broken apart at double spaces; every resulting
/// phrase is trimmed, empty phrases are dropped and the rest are put on
/// their own lines.
pub fn clean_text(raw: &str) -> String {
    raw.lines()
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

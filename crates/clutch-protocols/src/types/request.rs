//! Analysis request.

use serde::{Deserialize, Serialize};

/// Everything the analyzer needs to describe one page.
///
/// The caller owns the request for the duration of one call; analyzers only
/// borrow it. Page text is expected to be bounded upstream.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    /// API key sent as a header, never in the body.
    #[serde(skip_serializing)]
    pub credential: String,

    /// Visible page text.
    pub source_text: String,

    pub source_url: String,

    pub source_title: String,

    /// First `<h1>` of the page.
    pub page_headline: String,

    pub meta_description: String,

    /// Explicit domain; derived from `source_url` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_domain: Option<String>,
}

impl AnalysisRequest {
    /// Create a request for the given credential and page text.
    pub fn new(credential: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            source_text: source_text.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.source_title = title.into();
        self
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.page_headline = headline.into();
        self
    }

    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = description.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.source_domain = Some(domain.into());
        self
    }

    /// Cap the page text at `max_chars` characters, marking the cut with `...`.
    pub fn with_text_limit(mut self, max_chars: usize) -> Self {
        if let Some((cut, _)) = self.source_text.char_indices().nth(max_chars) {
            self.source_text.truncate(cut);
            self.source_text.push_str("...");
        }
        self
    }

    /// The page's host name.
    ///
    /// Uses the explicit domain when one was supplied, otherwise the host of
    /// `source_url`, otherwise an empty string.
    pub fn domain(&self) -> String {
        if let Some(domain) = self.source_domain.as_deref().filter(|d| !d.is_empty()) {
            return domain.to_string();
        }
        url::Url::parse(&self.source_url)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for AnalysisRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisRequest")
            .field("credential", &"<redacted>")
            .field("source_text_len", &self.source_text.len())
            .field("source_url", &self.source_url)
            .field("source_title", &self.source_title)
            .field("page_headline", &self.page_headline)
            .field("meta_description", &self.meta_description)
            .field("source_domain", &self.source_domain)
            .finish()
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

//! Client for the unauthenticated `translate_a/single` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use vani_core::Translate;

use crate::error::TranslateError;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com/";

/// Default per-request timeout. The upstream service specifies none,
/// so a bounded one is imposed and expiry is treated as a failed
/// translation.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Translator backed by the `client=gtx` web endpoint.
///
/// Use [`GoogleTranslator::new`] for production or
/// [`GoogleTranslator::with_base_url`] to point at a mock server in
/// tests. No retry, no caching, no batching: each call is an
/// independent GET.
pub struct GoogleTranslator {
    client: Client,
    base_url: Url,
}

impl GoogleTranslator {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, TranslateError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`TranslateError::BaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("vani/0.1 (comment-analysis)")
            .build()?;

        // Keep exactly one trailing slash so Url::join appends the
        // endpoint path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| TranslateError::BaseUrl(base_url.to_owned()))?;

        Ok(Self { client, base_url })
    }

    fn build_url(&self, text: &str) -> Result<Url, TranslateError> {
        let mut url = self
            .base_url
            .join("translate_a/single")
            .map_err(|_| TranslateError::BaseUrl(self.base_url.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("client", "gtx");
            pairs.append_pair("sl", "auto");
            pairs.append_pair("tl", "en");
            pairs.append_pair("dt", "t");
            pairs.append_pair("q", text);
        }
        Ok(url)
    }

    async fn request(&self, text: &str) -> Result<String, TranslateError> {
        let url = self.build_url(text)?;
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(TranslateError::Http)?;
        parse_translation(&body)
    }
}

impl Translate for GoogleTranslator {
    /// Translates `text` to English, auto-detecting the source language.
    ///
    /// Empty or whitespace-only input returns `None` without touching
    /// the network. Any service failure also returns `None`, after a
    /// warning log.
    async fn translate(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        match self.request(text).await {
            Ok(translated) => Some(translated),
            Err(e) => {
                tracing::warn!(error = %e, "translation failed");
                None
            }
        }
    }
}

/// Extracts the translated string from the endpoint's nested-array
/// body: element 0 is a list of chunks, each chunk's element 0 a
/// translated segment. Segments concatenate to the full translation.
fn parse_translation(body: &serde_json::Value) -> Result<String, TranslateError> {
    let chunks = body
        .get(0)
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| TranslateError::Malformed("missing chunk list".to_owned()))?;

    let mut out = String::new();
    for chunk in chunks {
        if let Some(segment) = chunk.get(0).and_then(serde_json::Value::as_str) {
            out.push_str(segment);
        }
    }

    if out.is_empty() {
        return Err(TranslateError::Malformed(
            "no translated segments in response".to_owned(),
        ));
    }
    Ok(out)
}

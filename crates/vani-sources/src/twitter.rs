//! X (Twitter) API v2 reply fetcher.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SourceError;

const DEFAULT_BASE_URL: &str = "https://api.twitter.com/";

#[derive(Debug, Deserialize)]
struct RepliesResponse {
    #[serde(default)]
    data: Vec<Tweet>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    text: String,
}

/// Client for fetching the replies to a post, bearer-token
/// authenticated.
pub struct TwitterClient {
    client: Client,
    bearer_token: String,
    base_url: Url,
}

impl TwitterClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(bearer_token: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        Self::with_base_url(bearer_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::BaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        bearer_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("vani/0.1 (comment-analysis)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|_| SourceError::BaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            bearer_token: bearer_token.to_owned(),
            base_url,
        })
    }

    /// Fetches the reply texts for one tweet, in API order.
    ///
    /// A response with no `data` field (a post with no replies) yields
    /// an empty list, not an error.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status
    ///   (including 401 for a bad bearer token).
    /// - [`SourceError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_replies(&self, tweet_id: &str) -> Result<Vec<String>, SourceError> {
        let url = self
            .base_url
            .join(&format!("2/tweets/{tweet_id}/replies"))
            .map_err(|_| SourceError::BaseUrl(self.base_url.to_string()))?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: RepliesResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: format!("replies(tweet_id={tweet_id})"),
                source: e,
            })?;

        tracing::debug!(tweet_id, count = parsed.data.len(), "fetched replies");

        Ok(parsed.data.into_iter().map(|t| t.text).collect())
    }
}

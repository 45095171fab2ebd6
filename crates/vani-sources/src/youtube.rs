//! YouTube Data API v3 comment fetcher.
//!
//! Pages through `commentThreads` for a video and flattens the
//! top-level comment display texts into one list. Pagination state
//! lives only inside the fetch call; nothing persists between runs.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SourceError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
const PAGE_SIZE: &str = "100";

/// Upper bound on pages followed in one fetch. A video with more
/// comment pages than this yields [`SourceError::PaginationLimit`]
/// instead of an unbounded crawl.
const MAX_PAGES: usize = 50;

#[derive(Debug, Deserialize)]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
struct ThreadSnippet {
    #[serde(rename = "topLevelComment")]
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textDisplay")]
    text_display: String,
}

/// Client for the YouTube Data API v3 `commentThreads` endpoint.
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YouTubeClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::BaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
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
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches every top-level comment on a video, in API order.
    ///
    /// Follows `nextPageToken` pagination (100 threads per page,
    /// plain-text format) until the feed is exhausted.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status.
    /// - [`SourceError::Deserialize`] if a page does not match the
    ///   expected shape.
    /// - [`SourceError::PaginationLimit`] past [`MAX_PAGES`] pages.
    pub async fn fetch_comments(&self, video_id: &str) -> Result<Vec<String>, SourceError> {
        let mut comments: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0_usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(SourceError::PaginationLimit {
                    max_pages: MAX_PAGES,
                });
            }

            let url = self.build_url(video_id, page_token.as_deref())?;
            let page = self.request_page(&url, video_id).await?;

            tracing::debug!(
                video_id,
                page = page_count,
                count = page.items.len(),
                "fetched comment page"
            );

            comments.extend(
                page.items
                    .into_iter()
                    .map(|thread| thread.snippet.top_level_comment.snippet.text_display),
            );

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(comments)
    }

    fn build_url(&self, video_id: &str, page_token: Option<&str>) -> Result<Url, SourceError> {
        let mut url = self
            .base_url
            .join("commentThreads")
            .map_err(|_| SourceError::BaseUrl(self.base_url.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("part", "snippet");
            pairs.append_pair("videoId", video_id);
            pairs.append_pair("textFormat", "plainText");
            pairs.append_pair("maxResults", PAGE_SIZE);
            pairs.append_pair("key", &self.api_key);
            if let Some(token) = page_token {
                pairs.append_pair("pageToken", token);
            }
        }
        Ok(url)
    }

    async fn request_page(
        &self,
        url: &Url,
        video_id: &str,
    ) -> Result<CommentThreadsResponse, SourceError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
            context: format!("commentThreads(videoId={video_id})"),
            source: e,
        })
    }
}

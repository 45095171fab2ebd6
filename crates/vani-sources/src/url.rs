//! Platform URL parsing.

/// Extracts the video ID from a YouTube watch URL.
///
/// Accepts `…youtube.com/watch?v=ID` forms, discarding any query
/// parameters after the ID. Returns `None` for anything else.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("youtube.com/watch?v=")?;
    let id = rest.split('&').next().unwrap_or_default();
    if id.is_empty() {
        return None;
    }
    Some(id.to_owned())
}

/// Extracts the tweet ID (the last path segment) from a post URL.
///
/// Query and fragment suffixes on the final segment (share links like
/// `…/status/123?s=20`) are dropped first. Returns `None` when what
/// remains is not a numeric status ID, which also rejects bare domain
/// URLs.
#[must_use]
pub fn extract_tweet_id(url: &str) -> Option<String> {
    let segment = url.trim_end_matches('/').rsplit('/').next()?;
    let id = segment.split(['?', '#']).next().unwrap_or_default();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(id.to_owned())
}

//! Comment source adapters.
//!
//! Fetch raw comment text from the supported platforms: top-level
//! YouTube video comments (Data API v3, paginated) and replies to a
//! post on X. Each adapter flattens its remote API into a plain
//! `Vec<String>` of raw comments; credentials are injected at
//! construction, never read from inside a request path.

pub mod error;
mod twitter;
mod url;
mod youtube;

pub use error::SourceError;
pub use twitter::TwitterClient;
pub use url::{extract_tweet_id, extract_video_id};
pub use youtube::YouTubeClient;

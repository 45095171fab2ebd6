//! Environment-backed configuration.
//!
//! Credentials are read once at startup and handed to adapter
//! constructors; nothing in the pipeline itself touches the
//! environment.

use crate::ScriptPolicy;

/// Runtime configuration for the CLI and adapters.
///
/// Both API keys are optional: only the key for the platform actually
/// selected is required, and that check happens at the point of use.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub youtube_api_key: Option<String>,
    pub twitter_bearer_token: Option<String>,
    pub script_policy: ScriptPolicy,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Reads `YOUTUBE_API_KEY`, `TWITTER_BEARER_TOKEN`, and
    /// `VANI_SCRIPT_POLICY` (defaults to `ascii-telugu` when unset).
    ///
    /// # Errors
    ///
    /// Returns `Err` if `VANI_SCRIPT_POLICY` is set to an unknown value.
    pub fn from_env() -> Result<Self, String> {
        let get = |key: &str| -> Option<String> { std::env::var(key).ok() };

        let script_policy = match get("VANI_SCRIPT_POLICY") {
            Some(raw) => raw
                .parse()
                .map_err(|e| format!("invalid VANI_SCRIPT_POLICY: {e}"))?,
            None => ScriptPolicy::default(),
        };

        Ok(Self {
            youtube_api_key: get("YOUTUBE_API_KEY"),
            twitter_bearer_token: get("TWITTER_BEARER_TOKEN"),
            script_policy,
        })
    }
}

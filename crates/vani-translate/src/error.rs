use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{0}'")]
    BaseUrl(String),

    #[error("malformed translation response: {0}")]
    Malformed(String),
}

//! HTTP adapter for the Google web-translate endpoint.
//!
//! Implements [`vani_core::Translate`]: auto-detected source language,
//! English target, one independent request per call. Every failure mode
//! (network, non-2xx, malformed body) collapses to `None` at the trait
//! boundary; the typed [`TranslateError`] exists for logging and tests.

mod client;
pub mod error;

pub use client::{GoogleTranslator, DEFAULT_TIMEOUT_SECS};
pub use error::TranslateError;

//! Comment analysis pipeline.
//!
//! Cleans raw social-media comments, translates them to English
//! through a [`vani_core::Translate`] implementation, classifies
//! sentiment with a lexicon scorer, and aggregates per-label counts
//! into a dominant-sentiment summary. CSV serialization of the row
//! table lives here too, since it is a direct projection of the
//! pipeline output.

pub mod csv;
pub mod normalize;
pub mod pipeline;
pub mod scorer;

pub use csv::rows_to_csv;
pub use normalize::normalize;
pub use pipeline::run_analysis;
pub use scorer::{classify, lexicon_score};

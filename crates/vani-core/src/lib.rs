//! Shared domain types for the vani comment-sentiment pipeline.
//!
//! Holds the vocabulary every other crate speaks: sentiment labels,
//! analysis rows, aggregate results, the script-retention policy, and
//! the [`Translate`] seam the pipeline calls through.

pub mod config;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Three-way sentiment label derived from the sign of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity score plus its derived label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Signed sentiment strength in `[-1.0, 1.0]`.
    pub polarity: f64,
}

/// One analyzed comment that survived normalization and translation.
///
/// `sentiment` is always computed from `translated`, never from the
/// original or merely-normalized text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRow {
    pub original: String,
    pub normalized: String,
    pub translated: String,
    pub sentiment: SentimentLabel,
}

/// Per-label row counts.
///
/// Field order doubles as the tie-break order for [`LabelCounts::dominant`]:
/// positive, then negative, then neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn increment(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn get(self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Returns the label with the highest count and that count.
    ///
    /// Ties resolve in declaration order (positive, negative, neutral),
    /// so the result is deterministic regardless of how the counts were
    /// accumulated.
    #[must_use]
    pub fn dominant(self) -> (SentimentLabel, usize) {
        let ordered = [
            (SentimentLabel::Positive, self.positive),
            (SentimentLabel::Negative, self.negative),
            (SentimentLabel::Neutral, self.neutral),
        ];
        let mut best = ordered[0];
        for candidate in &ordered[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        best
    }
}

/// Aggregate over all emitted rows, with the dominant label's share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub counts: LabelCounts,
    pub dominant: SentimentLabel,
    /// `100 * dominant_count / total_row_count`, rounded to 2 decimals.
    pub percentage: f64,
}

/// Final aggregate of a pipeline run.
///
/// `NoData` covers both "no comments fetched" and "every comment was
/// skipped" — distinct from a computed summary with tied zero counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AggregateResult {
    NoData,
    Computed(SentimentSummary),
}

/// Everything a pipeline run produces: the per-comment rows in input
/// order (minus skipped entries) and the aggregate.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub rows: Vec<AnalysisRow>,
    pub aggregate: AggregateResult,
}

/// Which scripts survive normalization.
///
/// ASCII is always retained; the wider policies additionally keep the
/// Telugu block (U+0C00–U+0C7F) and the Devanagari block
/// (U+0900–U+097F). Everything else — emoji included — is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptPolicy {
    Ascii,
    #[default]
    AsciiTelugu,
    AsciiTeluguDevanagari,
}

impl ScriptPolicy {
    /// Whether a character survives normalization under this policy.
    #[must_use]
    pub fn retains(self, c: char) -> bool {
        if c.is_ascii() {
            return true;
        }
        let telugu = ('\u{0C00}'..='\u{0C7F}').contains(&c);
        let devanagari = ('\u{0900}'..='\u{097F}').contains(&c);
        match self {
            Self::Ascii => false,
            Self::AsciiTelugu => telugu,
            Self::AsciiTeluguDevanagari => telugu || devanagari,
        }
    }
}

impl FromStr for ScriptPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(Self::Ascii),
            "ascii-telugu" => Ok(Self::AsciiTelugu),
            "ascii-telugu-hindi" => Ok(Self::AsciiTeluguDevanagari),
            other => Err(format!(
                "unknown script policy '{other}' (expected ascii, ascii-telugu, or ascii-telugu-hindi)"
            )),
        }
    }
}

/// Seam between the pipeline and the external translation service.
///
/// `None` means "no translation produced" — empty input, network
/// failure, or a malformed service response. Implementations never
/// panic and never propagate errors.
#[allow(async_fn_in_trait)]
pub trait Translate {
    async fn translate(&self, text: &str) -> Option<String>;
}

//! Analysis pipeline orchestration.

use vani_core::{
    AggregateResult, AnalysisReport, AnalysisRow, LabelCounts, ScriptPolicy, SentimentSummary,
    Translate,
};

use crate::normalize::normalize;
use crate::scorer::classify;

/// Run the full analysis over a fetched comment list.
///
/// Per comment, in input order: normalize under `policy`, translate
/// through `translator`, classify the translated text, and emit an
/// [`AnalysisRow`]. A comment whose normalization comes back empty, or
/// whose translation is absent, is skipped — no row, no count — but
/// progress still advances.
///
/// `on_progress` receives `(i + 1) / len` after each comment, clamped
/// to `[0, 1]`; calls are monotonically non-decreasing and the final
/// call is `1.0` whenever `comments` is non-empty.
///
/// The aggregate is [`AggregateResult::NoData`] when `comments` is
/// empty or when every comment was skipped; otherwise it carries the
/// per-label counts, the dominant label (ties broken positive,
/// negative, neutral), and the dominant label's percentage of the row
/// count rounded to two decimals.
///
/// Execution is strictly sequential: one comment is fully processed
/// before the next begins, and the only suspension point is the
/// translation call.
pub async fn run_analysis<T, F>(
    translator: &T,
    policy: ScriptPolicy,
    comments: &[String],
    mut on_progress: F,
) -> AnalysisReport
where
    T: Translate,
    F: FnMut(f64),
{
    if comments.is_empty() {
        return AnalysisReport {
            rows: Vec::new(),
            aggregate: AggregateResult::NoData,
        };
    }

    let total = comments.len();
    let mut rows: Vec<AnalysisRow> = Vec::new();
    let mut counts = LabelCounts::default();

    for (i, comment) in comments.iter().enumerate() {
        let normalized = normalize(comment, policy);
        if normalized.is_empty() {
            tracing::debug!(index = i, "comment empty after normalization, skipping");
            report_progress(&mut on_progress, i, total);
            continue;
        }

        let Some(translated) = translator.translate(&normalized).await else {
            tracing::debug!(index = i, "translation absent, skipping");
            report_progress(&mut on_progress, i, total);
            continue;
        };

        let sentiment = classify(&translated);
        counts.increment(sentiment.label);
        rows.push(AnalysisRow {
            original: comment.clone(),
            normalized,
            translated,
            sentiment: sentiment.label,
        });

        report_progress(&mut on_progress, i, total);
    }

    let aggregate = if rows.is_empty() {
        AggregateResult::NoData
    } else {
        let (dominant, dominant_count) = counts.dominant();
        #[allow(clippy::cast_precision_loss)]
        let percentage = round2(100.0 * dominant_count as f64 / counts.total() as f64);
        AggregateResult::Computed(SentimentSummary {
            counts,
            dominant,
            percentage,
        })
    };

    AnalysisReport { rows, aggregate }
}

fn report_progress(on_progress: &mut impl FnMut(f64), i: usize, total: usize) {
    #[allow(clippy::cast_precision_loss)]
    let fraction = (i + 1) as f64 / total as f64;
    on_progress(fraction.clamp(0.0, 1.0));
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use vani_core::SentimentLabel;

    /// Returns the input unchanged, as translation of already-English
    /// text does.
    struct EchoTranslator;

    impl Translate for EchoTranslator {
        async fn translate(&self, text: &str) -> Option<String> {
            Some(text.to_owned())
        }
    }

    /// Simulates a translation service that fails on every call.
    struct AbsentTranslator;

    impl Translate for AbsentTranslator {
        async fn translate(&self, _text: &str) -> Option<String> {
            None
        }
    }

    /// Panics when invoked; proves the pipeline never calls translate
    /// for comments that normalize to empty.
    struct PanickingTranslator;

    impl Translate for PanickingTranslator {
        async fn translate(&self, text: &str) -> Option<String> {
            panic!("translate must not be called, got {text:?}");
        }
    }

    fn comments(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_owned()).collect()
    }

    #[tokio::test]
    async fn empty_input_yields_no_data() {
        let report = run_analysis(&EchoTranslator, ScriptPolicy::Ascii, &[], |_| {}).await;
        assert!(report.rows.is_empty());
        assert_eq!(report.aggregate, AggregateResult::NoData);
    }

    #[tokio::test]
    async fn single_positive_comment() {
        let input = comments(&["great job!!"]);
        let report = run_analysis(&EchoTranslator, ScriptPolicy::Ascii, &input, |_| {}).await;

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].sentiment, SentimentLabel::Positive);
        assert_eq!(report.rows[0].original, "great job!!");
        assert_eq!(report.rows[0].translated, "great job!!");

        let AggregateResult::Computed(summary) = report.aggregate else {
            panic!("expected computed aggregate");
        };
        assert_eq!(summary.counts.positive, 1);
        assert_eq!(summary.counts.negative, 0);
        assert_eq!(summary.counts.neutral, 0);
        assert_eq!(summary.dominant, SentimentLabel::Positive);
        assert_eq!(summary.percentage, 100.0);
    }

    #[tokio::test]
    async fn whitespace_comment_skipped_without_translation() {
        // The first comment normalizes to "" and must never reach the
        // translator; the second survives.
        struct OnlyHi;
        impl Translate for OnlyHi {
            async fn translate(&self, text: &str) -> Option<String> {
                assert_eq!(text, "hi", "unexpected translate input");
                Some(text.to_owned())
            }
        }

        let input = comments(&["   ", "<b>hi</b> http://x.co @bob"]);
        let report = run_analysis(&OnlyHi, ScriptPolicy::Ascii, &input, |_| {}).await;

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].normalized, "hi");
    }

    #[tokio::test]
    async fn all_empty_comments_never_invoke_translator() {
        let input = comments(&["   ", "😀😀", "@bob http://x.co"]);
        let report = run_analysis(&PanickingTranslator, ScriptPolicy::Ascii, &input, |_| {}).await;
        assert!(report.rows.is_empty());
        assert_eq!(report.aggregate, AggregateResult::NoData);
    }

    #[tokio::test]
    async fn absent_translation_skips_row() {
        let input = comments(&["great job", "love it"]);
        let report = run_analysis(&AbsentTranslator, ScriptPolicy::Ascii, &input, |_| {}).await;
        assert!(report.rows.is_empty());
        assert_eq!(report.aggregate, AggregateResult::NoData);
    }

    #[tokio::test]
    async fn two_positive_one_negative_dominant_percentage() {
        let input = comments(&["great job", "love it", "terrible"]);
        let report = run_analysis(&EchoTranslator, ScriptPolicy::Ascii, &input, |_| {}).await;

        assert_eq!(report.rows.len(), 3);
        let AggregateResult::Computed(summary) = report.aggregate else {
            panic!("expected computed aggregate");
        };
        assert_eq!(summary.counts.positive, 2);
        assert_eq!(summary.counts.negative, 1);
        assert_eq!(summary.dominant, SentimentLabel::Positive);
        assert_eq!(summary.percentage, 66.67);
    }

    #[tokio::test]
    async fn tie_breaks_in_declaration_order() {
        // One positive, one negative: dominant must be positive.
        let input = comments(&["great job", "terrible"]);
        let report = run_analysis(&EchoTranslator, ScriptPolicy::Ascii, &input, |_| {}).await;

        let AggregateResult::Computed(summary) = report.aggregate else {
            panic!("expected computed aggregate");
        };
        assert_eq!(summary.counts.positive, 1);
        assert_eq!(summary.counts.negative, 1);
        assert_eq!(summary.dominant, SentimentLabel::Positive);
        assert_eq!(summary.percentage, 50.0);
    }

    #[tokio::test]
    async fn rows_preserve_input_order() {
        let input = comments(&["terrible", "great job", "plain words"]);
        let report = run_analysis(&EchoTranslator, ScriptPolicy::Ascii, &input, |_| {}).await;

        let labels: Vec<_> = report.rows.iter().map(|r| r.sentiment).collect();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Negative,
                SentimentLabel::Positive,
                SentimentLabel::Neutral
            ]
        );
        assert_eq!(report.rows[0].original, "terrible");
        assert_eq!(report.rows[2].original, "plain words");
    }

    #[tokio::test]
    async fn aggregate_count_equals_row_count() {
        let input = comments(&["great", "  ", "terrible", "plain words", "😀"]);
        let report = run_analysis(&EchoTranslator, ScriptPolicy::Ascii, &input, |_| {}).await;

        assert!(report.rows.len() <= input.len());
        let AggregateResult::Computed(summary) = report.aggregate else {
            panic!("expected computed aggregate");
        };
        assert_eq!(summary.counts.total(), report.rows.len());
        assert_eq!(report.rows.len(), 3);
    }

    #[tokio::test]
    async fn progress_is_monotone_and_ends_at_one() {
        let input = comments(&["great", "  ", "terrible", "😀", "plain"]);
        let mut fractions: Vec<f64> = Vec::new();
        let report = run_analysis(&EchoTranslator, ScriptPolicy::Ascii, &input, |f| {
            fractions.push(f);
        })
        .await;

        // One call per comment, skips included.
        assert_eq!(fractions.len(), input.len());
        assert!(fractions.windows(2).all(|w| w[0] <= w[1]), "not monotone: {fractions:?}");
        assert!(fractions.iter().all(|f| (0.0..=1.0).contains(f)));
        assert_eq!(*fractions.last().unwrap(), 1.0);
        assert_eq!(report.rows.len(), 3);
    }

    #[tokio::test]
    async fn progress_reaches_one_even_when_all_skipped() {
        let input = comments(&["  ", "😀"]);
        let mut last = 0.0;
        let report = run_analysis(&AbsentTranslator, ScriptPolicy::Ascii, &input, |f| {
            last = f;
        })
        .await;
        assert_eq!(last, 1.0);
        assert_eq!(report.aggregate, AggregateResult::NoData);
    }

    #[tokio::test]
    async fn sentiment_computed_from_translated_text() {
        // Source text is neutral; the translation is positive. The row
        // label must follow the translation.
        struct Positivizer;
        impl Translate for Positivizer {
            async fn translate(&self, _text: &str) -> Option<String> {
                Some("this is great".to_owned())
            }
        }

        let input = comments(&["plain words"]);
        let report = run_analysis(&Positivizer, ScriptPolicy::Ascii, &input, |_| {}).await;
        assert_eq!(report.rows[0].sentiment, SentimentLabel::Positive);
        assert_eq!(report.rows[0].normalized, "plain words");
        assert_eq!(report.rows[0].translated, "this is great");
    }
}

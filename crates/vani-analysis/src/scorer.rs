//! Lexicon-based polarity scorer and three-way classifier.

use vani_core::{SentimentLabel, SentimentResult};

/// General-English word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("awesome", 0.5),
    ("amazing", 0.5),
    ("wonderful", 0.5),
    ("fantastic", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("like", 0.2),
    ("liked", 0.2),
    ("best", 0.5),
    ("nice", 0.3),
    ("beautiful", 0.4),
    ("happy", 0.4),
    ("helpful", 0.3),
    ("thanks", 0.3),
    ("thank", 0.3),
    ("perfect", 0.5),
    ("super", 0.3),
    ("enjoyed", 0.4),
    ("fun", 0.3),
    ("win", 0.4),
    ("cool", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("worst", -0.6),
    ("hate", -0.6),
    ("hated", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("poor", -0.3),
    ("sad", -0.3),
    ("angry", -0.4),
    ("boring", -0.4),
    ("stupid", -0.5),
    ("waste", -0.4),
    ("useless", -0.5),
    ("disappointing", -0.5),
    ("disappointed", -0.5),
    ("wrong", -0.3),
    ("fake", -0.4),
    ("scam", -0.7),
    ("spam", -0.5),
    ("dislike", -0.4),
    ("cringe", -0.4),
    ("trash", -0.5),
    ("garbage", -0.5),
];

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns exactly `0.0` for empty text or
/// text with no lexicon hits.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    let mut score = 0.0_f64;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Classify English text into a polarity score and label.
///
/// The label is a strict sign threshold with no epsilon band:
/// `polarity > 0` is positive, `polarity < 0` is negative, and exactly
/// `0.0` is neutral. Empty or purely-neutral text scores `0.0` and so
/// always classifies neutral.
#[must_use]
pub fn classify(text: &str) -> SentimentResult {
    let polarity = lexicon_score(text);
    let label = if polarity > 0.0 {
        SentimentLabel::Positive
    } else if polarity < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };
    SentimentResult { label, polarity }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = lexicon_score("this video is great");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = lexicon_score("what a terrible take");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let text = "great excellent best love amazing wonderful perfect awesome";
        assert_eq!(lexicon_score(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "terrible worst hate awful horrible scam trash garbage";
        assert_eq!(lexicon_score(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = lexicon_score("great!!");
        assert!(score > 0.0, "expected positive score for 'great!!', got {score}");
    }

    #[test]
    fn classify_is_deterministic() {
        let a = classify("love this, thanks");
        let b = classify("love this, thanks");
        assert_eq!(a.label, b.label);
        assert_eq!(a.polarity, b.polarity);
    }

    #[test]
    fn classify_positive_polarity_yields_positive() {
        let result = classify("great job");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.polarity > 0.0);
    }

    #[test]
    fn classify_negative_polarity_yields_negative() {
        let result = classify("boring waste of time");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.polarity < 0.0);
    }

    #[test]
    fn classify_exact_zero_yields_neutral() {
        let result = classify("");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.polarity, 0.0);

        let result = classify("a plain statement about weather");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.polarity, 0.0);
    }

    #[test]
    fn classify_cancelling_weights_yields_neutral() {
        // good (+0.3) + poor (-0.3) sum to exactly 0.0.
        let result = classify("good start poor finish");
        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }
}

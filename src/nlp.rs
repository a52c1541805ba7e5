//! Collaborator seams for NLP capabilities the core consumes but does not
//! own: tokenization (clarity scoring) and sentiment analysis.
//!
//! The analyzer works against these traits; the built-in adapters keep the
//! crate usable standalone, and callers with a real NLP pipeline can inject
//! their own implementations.

use crate::types::Sentiment;

/// Produces token boundaries for clarity scoring.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Scores polarity in [-1, 1] and subjectivity in [0, 1] for arbitrary text.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Sentiment;
}

/// Default tokenizer: whitespace word boundaries.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|t| t.to_string()).collect()
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "best", "amazing", "easy", "happy", "awesome",
    "reliable", "helpful", "perfect", "nice",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "poor", "hate", "worst", "slow", "difficult", "problem", "broken",
    "frustrating", "awful", "annoying",
];

const SUBJECTIVE_WORDS: &[&str] = &[
    "very", "really", "extremely", "absolutely", "definitely", "think", "feel", "believe",
    "want", "need", "must", "should", "hope", "wish",
];

/// Default sentiment adapter: word-list polarity and subjectivity counts.
/// Deterministic and dependency-free; callers wanting a real model inject
/// their own [`SentimentAnalyzer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl SentimentAnalyzer for LexiconSentiment {
    fn analyze(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        if tokens.is_empty() {
            return Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        let positive = tokens
            .iter()
            .filter(|t| POSITIVE_WORDS.iter().any(|w| t.contains(w)))
            .count();
        let negative = tokens
            .iter()
            .filter(|t| NEGATIVE_WORDS.iter().any(|w| t.contains(w)))
            .count();
        let subjective = tokens
            .iter()
            .filter(|t| SUBJECTIVE_WORDS.iter().any(|w| *t == w))
            .count();

        let scored = positive + negative;
        let polarity = if scored == 0 {
            0.0
        } else {
            (positive as f64 - negative as f64) / scored as f64
        };
        let subjectivity = ((scored + subjective) as f64 / tokens.len() as f64).min(1.0);

        Sentiment {
            polarity,
            subjectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer_splits_words() {
        let tokens = WhitespaceTokenizer.tokenize("I need  an online store");
        assert_eq!(tokens, vec!["I", "need", "an", "online", "store"]);
    }

    #[test]
    fn test_whitespace_tokenizer_empty_input() {
        assert!(WhitespaceTokenizer.tokenize("").is_empty());
        assert!(WhitespaceTokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_sentiment_positive_text() {
        let s = LexiconSentiment.analyze("this is a great and reliable system");
        assert!(s.polarity > 0.0);
        assert!(s.polarity <= 1.0);
    }

    #[test]
    fn test_sentiment_negative_text() {
        let s = LexiconSentiment.analyze("the old system is slow and terrible");
        assert!(s.polarity < 0.0);
        assert!(s.polarity >= -1.0);
    }

    #[test]
    fn test_sentiment_neutral_and_empty() {
        let neutral = LexiconSentiment.analyze("inventory tracking for the warehouse");
        assert_eq!(neutral.polarity, 0.0);

        let empty = LexiconSentiment.analyze("");
        assert_eq!(empty.polarity, 0.0);
        assert_eq!(empty.subjectivity, 0.0);
    }

    #[test]
    fn test_sentiment_subjectivity_bounded() {
        let s = LexiconSentiment.analyze("I really really want a very very good great amazing app");
        assert!(s.subjectivity > 0.0);
        assert!(s.subjectivity <= 1.0);
    }
}

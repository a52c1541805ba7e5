//! Text Signal Extractor and Clarification Policy.
//!
//! Turns raw client text into typed [`TextSignals`] using only the lexicon
//! tables and the injected NLP collaborators. Never fails: garbage or empty
//! input degrades to low-confidence defaults.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::nlp::{LexiconSentiment, SentimentAnalyzer, Tokenizer, WhitespaceTokenizer};
use crate::types::{
    round2, BudgetIndicators, CategoryMatch, NotificationNeed, Platform, PlatformMatch,
    Portability, TextSignals, TimelineIndicators, Urgency,
};

/// Monetary amounts: optional `$`, thousands separators, optional cents.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?(\d+(?:,\d{3})*(?:\.\d{2})?)").unwrap());

/// Extracts [`TextSignals`] from free text against a shared [`Lexicon`].
pub struct TextAnalyzer {
    lexicon: Arc<Lexicon>,
    tokenizer: Box<dyn Tokenizer>,
    sentiment: Box<dyn SentimentAnalyzer>,
}

impl TextAnalyzer {
    /// Analyzer with the built-in NLP adapters.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_collaborators(
            lexicon,
            Box::new(WhitespaceTokenizer),
            Box::new(LexiconSentiment),
        )
    }

    /// Analyzer with caller-supplied tokenizer and sentiment collaborators.
    pub fn with_collaborators(
        lexicon: Arc<Lexicon>,
        tokenizer: Box<dyn Tokenizer>,
        sentiment: Box<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            lexicon,
            tokenizer,
            sentiment,
        }
    }

    /// Extract all signals from one piece of client text.
    pub fn analyze(&self, text: &str) -> TextSignals {
        let processed = preprocess(text);

        let signals = TextSignals {
            original_text: text.to_string(),
            clarity_score: self.clarity_score(&processed),
            business_type: self.classify_business(&processed),
            platform_preference: self.detect_platform(&processed),
            detected_features: self.detect_features(&processed),
            sentiment: self.analyze_sentiment(text),
            urgency_level: self.detect_urgency(&processed),
            budget_indicators: self.budget_indicators(text, &processed),
            timeline_indicators: self.timeline_indicators(&processed),
            portability: self.detect_portability(&processed),
            notification_requirement: self.detect_notification(&processed),
        };
        debug!(
            business = %signals.business_type.category,
            clarity = signals.clarity_score,
            features = signals.detected_features.len(),
            "text analyzed"
        );
        signals
    }

    /// Business category with the highest keyword-match count. Ties resolve
    /// to the first category in lexicon table order; zero matches yield
    /// `("unknown", 0.0)`.
    fn classify_business(&self, text: &str) -> CategoryMatch {
        let mut best: Option<(&str, usize)> = None;
        for (category, keywords) in &self.lexicon.business_keywords {
            let count = count_matches(text, keywords);
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((category, count));
            }
        }
        match best {
            Some((category, count)) if count > 0 => CategoryMatch {
                category: category.to_string(),
                confidence: round2(count as f64 / self.lexicon.max_business_keyword_set() as f64),
            },
            _ => CategoryMatch {
                category: "unknown".to_string(),
                confidence: 0.0,
            },
        }
    }

    /// Platform with the highest keyword-match count; `(web, 0.3)` when
    /// nothing matches.
    fn detect_platform(&self, text: &str) -> PlatformMatch {
        let mut best: Option<(Platform, usize)> = None;
        for (platform, keywords) in &self.lexicon.platform_keywords {
            let count = count_matches(text, keywords);
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((*platform, count));
            }
        }
        match best {
            Some((platform, count)) if count > 0 => PlatformMatch {
                platform,
                confidence: round2(count as f64 / self.lexicon.max_platform_keyword_set() as f64),
            },
            _ => PlatformMatch {
                platform: Platform::Web,
                confidence: 0.3,
            },
        }
    }

    /// Feature categories with at least one keyword present, in table order.
    fn detect_features(&self, text: &str) -> Vec<String> {
        self.lexicon
            .feature_keywords
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw.as_str())))
            .map(|(category, _)| category.clone())
            .collect()
    }

    /// Share of tokens carrying any domain keyword, scaled and clamped:
    /// `min(1.0, matched/total * 10 + 0.2)`. 0.0 when tokenization is empty.
    fn clarity_score(&self, text: &str) -> f64 {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let matched = tokens
            .iter()
            .filter(|token| self.token_hits_lexicon(token))
            .count();

        round2((matched as f64 / tokens.len() as f64 * 10.0 + 0.2).min(1.0))
    }

    fn token_hits_lexicon(&self, token: &str) -> bool {
        let business = self
            .lexicon
            .business_keywords
            .values()
            .flatten()
            .any(|kw| token.contains(kw.as_str()));
        let platform = self
            .lexicon
            .platform_keywords
            .values()
            .flatten()
            .any(|kw| token.contains(kw.as_str()));
        let feature = self
            .lexicon
            .feature_keywords
            .values()
            .flatten()
            .any(|kw| token.contains(kw.as_str()));
        business || platform || feature
    }

    fn analyze_sentiment(&self, text: &str) -> crate::types::Sentiment {
        let raw = self.sentiment.analyze(text);
        crate::types::Sentiment {
            polarity: round2(raw.polarity),
            subjectivity: round2(raw.subjectivity),
        }
    }

    /// >=2 urgency keywords -> high, exactly 1 -> medium, else low.
    fn detect_urgency(&self, text: &str) -> Urgency {
        match count_matches(text, &self.lexicon.urgency_keywords) {
            0 => Urgency::Low,
            1 => Urgency::Medium,
            _ => Urgency::High,
        }
    }

    /// Budget keyword flag plus all numeric amounts above 100. Amounts are
    /// scanned in the raw text: preprocessing strips `$`.
    fn budget_indicators(&self, raw_text: &str, processed: &str) -> BudgetIndicators {
        let mentioned = self
            .lexicon
            .budget_keywords
            .iter()
            .any(|kw| processed.contains(kw.as_str()));

        let amounts = AMOUNT_RE
            .captures_iter(raw_text)
            .filter_map(|cap| cap[1].replace(',', "").parse::<f64>().ok())
            .map(|amount| amount.trunc() as i64)
            .filter(|amount| *amount > 100)
            .collect();

        BudgetIndicators { mentioned, amounts }
    }

    fn timeline_indicators(&self, text: &str) -> TimelineIndicators {
        let mentioned = self
            .lexicon
            .timeline_keywords
            .iter()
            .any(|kw| text.contains(kw.as_str()));
        let time_units = self
            .lexicon
            .time_units
            .iter()
            .filter(|unit| text.contains(unit.as_str()))
            .cloned()
            .collect();

        TimelineIndicators {
            mentioned,
            time_units,
        }
    }

    /// Tier priority high > medium > low; medium when nothing matches.
    fn detect_portability(&self, text: &str) -> Portability {
        if count_matches(text, &self.lexicon.portability_high) > 0 {
            Portability::High
        } else if count_matches(text, &self.lexicon.portability_medium) > 0 {
            Portability::Medium
        } else if count_matches(text, &self.lexicon.portability_low) > 0 {
            Portability::Low
        } else {
            Portability::Medium
        }
    }

    /// `major` requires at least 2 major-keyword matches; a single match is
    /// not enough to escalate the platform choice.
    fn detect_notification(&self, text: &str) -> NotificationNeed {
        if count_matches(text, &self.lexicon.notification_major) >= 2 {
            NotificationNeed::Major
        } else if count_matches(text, &self.lexicon.notification_minor) > 0 {
            NotificationNeed::Minor
        } else {
            NotificationNeed::None
        }
    }

    /// Clarification is needed when the text is vague: low clarity, unknown
    /// or weakly-matched business type, or no detected features.
    pub fn needs_clarification(&self, signals: &TextSignals) -> bool {
        signals.clarity_score < 0.5
            || signals.business_type.category == "unknown"
            || signals.business_type.confidence < 0.3
            || signals.detected_features.is_empty()
    }

    /// Up to 3 follow-up questions in fixed priority order.
    pub fn generate_clarification_questions(&self, signals: &TextSignals) -> Vec<String> {
        let mut questions = Vec::new();

        if signals.business_type.category == "unknown" || signals.business_type.confidence < 0.3 {
            questions.push("What type of business do you operate?".to_string());
        }
        if signals.detected_features.is_empty() {
            questions.push("What specific features or functionality do you need?".to_string());
        }
        if !signals.budget_indicators.mentioned {
            questions.push("Do you have a budget range in mind for this project?".to_string());
        }
        if !signals.timeline_indicators.mentioned {
            questions.push("When do you need this system to be completed?".to_string());
        }
        if signals.clarity_score < 0.4 {
            questions
                .push("Can you provide more details about your business requirements?".to_string());
        }

        questions.truncate(3);
        questions
    }
}

/// Lowercase, collapse whitespace, strip characters outside word characters,
/// whitespace and `- . , ! ?`.
fn preprocess(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept: String = lower
        .chars()
        .filter(|c| {
            c.is_alphanumeric()
                || *c == '_'
                || c.is_whitespace()
                || matches!(c, '-' | '.' | ',' | '!' | '?')
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn count_matches(text: &str, keywords: &[String]) -> usize {
    keywords.iter().filter(|kw| text.contains(kw.as_str())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> TextAnalyzer {
        TextAnalyzer::new(Arc::new(Lexicon::builtin()))
    }

    // =========================================================================
    // preprocessing
    // =========================================================================

    #[test]
    fn test_preprocess_normalizes() {
        assert_eq!(
            preprocess("  I NEED   an #online$ store!  "),
            "i need an online store!"
        );
    }

    // =========================================================================
    // business classification
    // =========================================================================

    #[test]
    fn test_classify_retail() {
        let signals = analyzer().analyze("I need an online store to sell my products");
        assert_eq!(signals.business_type.category, "retail");
        assert!(signals.business_type.confidence > 0.0);
    }

    #[test]
    fn test_classify_restaurant() {
        let signals = analyzer().analyze("I want a mobile app for food delivery from my restaurant");
        assert_eq!(signals.business_type.category, "restaurant");
    }

    #[test]
    fn test_classify_unknown_on_garbage() {
        let signals = analyzer().analyze("xyzzy plugh quux");
        assert_eq!(signals.business_type.category, "unknown");
        assert_eq!(signals.business_type.confidence, 0.0);
    }

    #[test]
    fn test_classify_tie_breaks_in_table_order() {
        // "delivery" is a keyword for both restaurant and logistics; the
        // restaurant table comes first.
        let signals = analyzer().analyze("delivery");
        assert_eq!(signals.business_type.category, "restaurant");
    }

    #[test]
    fn test_business_confidence_normalized_by_largest_set() {
        // 3 retail keywords (store, online store, products) over the largest
        // business keyword set (8).
        let signals = analyzer().analyze("I need an online store to sell my products");
        assert_eq!(signals.business_type.confidence, round2(3.0 / 8.0));
    }

    // =========================================================================
    // platform preference
    // =========================================================================

    #[test]
    fn test_platform_defaults_to_web() {
        let signals = analyzer().analyze("something for my shop");
        assert_eq!(signals.platform_preference.platform, Platform::Web);
        assert_eq!(signals.platform_preference.confidence, 0.3);
    }

    #[test]
    fn test_platform_detects_mobile() {
        let signals = analyzer().analyze("an android and ios phone app");
        assert_eq!(signals.platform_preference.platform, Platform::Mobile);
        assert!(signals.platform_preference.confidence > 0.3);
    }

    // =========================================================================
    // feature detection
    // =========================================================================

    #[test]
    fn test_detect_features_in_table_order() {
        let signals = analyzer().analyze("inventory tracking with payment checkout");
        assert_eq!(
            signals.detected_features,
            vec!["inventory", "payment", "tracking"]
        );
    }

    #[test]
    fn test_detect_features_empty_for_vague_text() {
        let signals = analyzer().analyze("I need something for my business");
        assert!(signals.detected_features.is_empty());
    }

    // =========================================================================
    // clarity
    // =========================================================================

    #[test]
    fn test_clarity_zero_on_empty() {
        assert_eq!(analyzer().analyze("").clarity_score, 0.0);
        assert_eq!(analyzer().analyze("   ").clarity_score, 0.0);
    }

    #[test]
    fn test_clarity_bounded() {
        for text in [
            "store",
            "I need an online store to sell my products",
            "a b c d e f g h i j k l m n o p",
            "!!!",
        ] {
            let clarity = analyzer().analyze(text).clarity_score;
            assert!((0.0..=1.0).contains(&clarity), "clarity {clarity} for {text:?}");
        }
    }

    #[test]
    fn test_clarity_high_for_specific_input() {
        let signals = analyzer().analyze("I need an online store to sell my products");
        assert!(signals.clarity_score > 0.5);
    }

    #[test]
    fn test_clarity_floor_without_keywords() {
        // No keyword tokens: 0/n * 10 + 0.2
        let signals = analyzer().analyze("hello there friend");
        assert_eq!(signals.clarity_score, 0.2);
    }

    // =========================================================================
    // urgency
    // =========================================================================

    #[test]
    fn test_urgency_levels() {
        assert_eq!(analyzer().analyze("a simple site").urgency_level, Urgency::Low);
        assert_eq!(
            analyzer().analyze("I need this urgent").urgency_level,
            Urgency::Medium
        );
        assert_eq!(
            analyzer().analyze("urgent, need it asap").urgency_level,
            Urgency::High
        );
    }

    // =========================================================================
    // budget / timeline indicators
    // =========================================================================

    #[test]
    fn test_budget_amounts_parsed_and_filtered() {
        let signals = analyzer().analyze("my budget is $25,000 for 3 apps");
        assert!(signals.budget_indicators.mentioned);
        // 3 is filtered by the >100 floor
        assert_eq!(signals.budget_indicators.amounts, vec![25_000]);
    }

    #[test]
    fn test_budget_amount_with_cents() {
        let signals = analyzer().analyze("around 1,500.00 dollars");
        assert_eq!(signals.budget_indicators.amounts, vec![1_500]);
    }

    #[test]
    fn test_budget_not_mentioned() {
        let signals = analyzer().analyze("an online store");
        assert!(!signals.budget_indicators.mentioned);
        assert!(signals.budget_indicators.amounts.is_empty());
    }

    #[test]
    fn test_timeline_units_detected() {
        let signals = analyzer().analyze("deadline in 6 weeks, maybe 2 months");
        assert!(signals.timeline_indicators.mentioned);
        assert_eq!(signals.timeline_indicators.time_units, vec!["week", "month"]);
    }

    // =========================================================================
    // portability / notification
    // =========================================================================

    #[test]
    fn test_portability_high_wins_over_low() {
        // "mobile" (high tier) and "desktop" (low tier) both present
        let signals = analyzer().analyze("mobile access from a desktop office");
        assert_eq!(signals.portability, Portability::High);
    }

    #[test]
    fn test_portability_default_medium() {
        let signals = analyzer().analyze("a system for my shop");
        assert_eq!(signals.portability, Portability::Medium);
    }

    #[test]
    fn test_portability_low() {
        let signals = analyzer().analyze("a workstation program for the office");
        assert_eq!(signals.portability, Portability::Low);
    }

    #[test]
    fn test_notification_major_needs_two_matches() {
        // Scenario: two or more major keywords escalate to major
        let signals = analyzer().analyze("urgent real-time alert tracking");
        assert_eq!(signals.notification_requirement, NotificationNeed::Major);

        // a single major keyword is not enough
        let signals = analyzer().analyze("send an alert sometimes");
        assert_ne!(signals.notification_requirement, NotificationNeed::Major);
    }

    #[test]
    fn test_notification_minor_and_none() {
        let signals = analyzer().analyze("a weekly email newsletter");
        assert_eq!(signals.notification_requirement, NotificationNeed::Minor);

        let signals = analyzer().analyze("an online shop");
        assert_eq!(signals.notification_requirement, NotificationNeed::None);
    }

    // =========================================================================
    // clarification policy
    // =========================================================================

    #[test]
    fn test_needs_clarification_on_vague_input() {
        let a = analyzer();
        let signals = a.analyze("I need something to help manage my business");
        assert!(a.needs_clarification(&signals));
    }

    #[test]
    fn test_no_clarification_on_specific_input() {
        let a = analyzer();
        let signals =
            a.analyze("I need an online store selling products with inventory and payment checkout");
        assert!(!a.needs_clarification(&signals));
    }

    #[test]
    fn test_needs_clarification_when_clarity_low() {
        let a = analyzer();
        let mut signals =
            a.analyze("I need an online store selling products with inventory tracking");
        assert!(!a.needs_clarification(&signals));
        signals.clarity_score = 0.4;
        assert!(a.needs_clarification(&signals));
    }

    #[test]
    fn test_questions_capped_at_three_business_first() {
        let a = analyzer();
        let signals = a.analyze("xyzzy");
        let questions = a.generate_clarification_questions(&signals);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0], "What type of business do you operate?");
        assert_eq!(
            questions[1],
            "What specific features or functionality do you need?"
        );
        assert_eq!(
            questions[2],
            "Do you have a budget range in mind for this project?"
        );
    }

    #[test]
    fn test_questions_skip_satisfied_conditions() {
        let a = analyzer();
        let signals = a.analyze(
            "an online store selling products with inventory, budget $20,000, deadline in 8 weeks",
        );
        let questions = a.generate_clarification_questions(&signals);
        assert!(questions.is_empty(), "unexpected questions: {questions:?}");
    }

    // =========================================================================
    // idempotence
    // =========================================================================

    #[test]
    fn test_analyze_is_idempotent() {
        let a = analyzer();
        let text = "I want a mobile app for food delivery with real-time tracking";
        let first = a.analyze(text);
        let second = a.analyze(text);
        assert_eq!(first.business_type, second.business_type);
        assert_eq!(first.platform_preference, second.platform_preference);
        assert_eq!(first.detected_features, second.detected_features);
        assert_eq!(first.portability, second.portability);
        assert_eq!(
            first.notification_requirement,
            second.notification_requirement
        );
    }
}

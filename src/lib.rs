//! stackcompass - deterministic technology recommendations
//!
//! Turns a free-text description of a business need into a structured
//! recommendation: target platform, feature list, technology stack, cost and
//! timeline estimates, and a blended confidence score - plus a decision on
//! whether the input is too vague and which clarifying questions to ask.
//!
//! All classification is deterministic keyword matching against the
//! versionable [`Lexicon`] tables; there is no ML, no I/O and no persistence
//! inside the core. The only non-determinism is the per-feature effort/cost
//! draw, pinned with [`RecommendationEngine::with_seed`].
//!
//! # Quick start
//!
//! ```rust
//! use stackcompass::{AccessRequirement, AdditionalInfo, Portability, RecommendationEngine};
//!
//! let engine = RecommendationEngine::new();
//!
//! // Ask clarifying questions before committing to a full run
//! let signals = engine.analyze_text("I need an online store to sell my products");
//! if engine.needs_clarification(&signals) {
//!     for question in engine.generate_clarification_questions(&signals) {
//!         println!("{question}");
//!     }
//! }
//!
//! let info = AdditionalInfo {
//!     portability_requirement: Some(Portability::Medium),
//!     business_type: Some("retail".to_string()),
//!     access_requirement: Some(AccessRequirement::Online),
//!     ..Default::default()
//! };
//! let recommendation = engine
//!     .generate_recommendation("I need an online store to sell my products", &info)
//!     .unwrap();
//! println!(
//!     "{} via {}",
//!     recommendation.platform_recommendation.platform.name(),
//!     recommendation.tech_stack_recommendation.name
//! );
//! ```
//!
//! # Pipeline
//!
//! ```text
//! text ──> TextAnalyzer ──> TextSignals
//!                              │
//!            ┌─ clarification ─┤
//!            ▼                 ▼
//!        questions     platform -> features -> stack -> cost/timeline
//!                              │
//!                              ▼
//!                        Recommendation (+ confidence)
//! ```

pub mod analyzer;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod nlp;
pub mod types;

// Core pipeline
pub use analyzer::TextAnalyzer;
pub use engine::RecommendationEngine;
pub use lexicon::{Lexicon, TechStack};

// Errors
pub use error::{CorpusError, EngineError};

// Collaborator seams
pub use corpus::{by_platform, CorpusSource, CorpusStats, SampleCorpus, SampleRequirement};
pub use nlp::{LexiconSentiment, SentimentAnalyzer, Tokenizer, WhitespaceTokenizer};

// Data model
pub use types::{
    AccessRequirement, AdditionalInfo, BudgetIndicators, CategoryMatch, CostEstimate,
    FeatureRecommendation, NotificationNeed, Platform, PlatformMatch, PlatformRecommendation,
    Portability, Priority, ProjectProfile, Recommendation, Sentiment, TechStackRecommendation,
    TextSignals, TimelineEstimate, TimelineIndicators, Urgency,
};

//! Error taxonomy for the recommendation core.
//!
//! Validation failures are detected once at the engine boundary and carry
//! enough context to name the offending field. Nothing inside the decision
//! logic swallows an error and substitutes a default.

use thiserror::Error;

/// Errors returned by [`RecommendationEngine`](crate::RecommendationEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A field the platform recommender depends on was absent from
    /// `AdditionalInfo`. Raised at the entry point, before any analysis.
    #[error("missing required configuration field `{field}`")]
    MissingConfiguration { field: &'static str },

    /// A budget or timeline constraint was supplied but is not a positive
    /// finite number.
    #[error("invalid constraint `{field}`: {value} is not a positive number")]
    InvalidConstraint { field: &'static str, value: f64 },
}

/// Errors surfaced by a [`CorpusSource`](crate::corpus::CorpusSource)
/// collaborator. The core treats these as opaque: it never inspects the
/// underlying cause.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("requirements corpus unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}

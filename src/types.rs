//! Core types for the stackcompass recommendation pipeline.
//!
//! Everything here is created fresh per engine call and never mutated after
//! construction. The only shared state in the crate is the read-only
//! [`Lexicon`](crate::lexicon::Lexicon).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// Target platform for the recommended system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    Web,
    Desktop,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile",
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }

    /// Capitalized form for human-facing reasoning strings.
    pub fn title(&self) -> &'static str {
        match self {
            Platform::Mobile => "Mobile",
            Platform::Web => "Web",
            Platform::Desktop => "Desktop",
        }
    }
}

/// How urgent the client's language reads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// How location-independent the target system must be.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Portability {
    Low,
    Medium,
    High,
}

/// How heavy the alerting/notification needs are. `Major` escalates the
/// platform choice toward mobile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationNeed {
    None,
    Minor,
    Major,
}

/// Whether the system must work without connectivity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccessRequirement {
    Online,
    Offline,
}

/// Priority of a recommended feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// Best-matching business category with its keyword-match confidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMatch {
    pub category: String,
    pub confidence: f64,
}

/// Platform preference detected in the text, with confidence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlatformMatch {
    pub platform: Platform,
    pub confidence: f64,
}

/// Sentiment of the input text, TextBlob-style ranges:
/// polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Budget hints found in the text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetIndicators {
    pub mentioned: bool,
    /// Numeric amounts above 100, parsed from the text.
    pub amounts: Vec<i64>,
}

/// Timeline hints found in the text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineIndicators {
    pub mentioned: bool,
    /// Subset of {week, month, year, day, hour} literally present.
    pub time_units: Vec<String>,
}

/// Typed signals extracted from one piece of client text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSignals {
    pub original_text: String,
    /// Normalized measure of how specific the requirement statement is.
    pub clarity_score: f64,
    pub business_type: CategoryMatch,
    pub platform_preference: PlatformMatch,
    /// Feature-category ids, unique, in lexicon table order.
    pub detected_features: Vec<String>,
    pub sentiment: Sentiment,
    pub urgency_level: Urgency,
    pub budget_indicators: BudgetIndicators,
    pub timeline_indicators: TimelineIndicators,
    pub portability: Portability,
    pub notification_requirement: NotificationNeed,
}

/// Caller-supplied overrides and constraints. All fields optional at the
/// type level; `portability_requirement`, `business_type` and
/// `access_requirement` are validated as required by
/// [`AdditionalInfo::validate`] before the engine runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub portability_requirement: Option<Portability>,
    pub business_type: Option<String>,
    pub access_requirement: Option<AccessRequirement>,
    pub budget_constraint: Option<f64>,
    pub timeline_constraint: Option<f64>,
    #[serde(default)]
    pub requested_features: Vec<String>,
    pub tech_stack_preference: Option<String>,
}

impl AdditionalInfo {
    /// Validate the loose options bag into a [`ProjectProfile`] with the
    /// required fields guaranteed present and the constraints checked.
    pub fn validate(&self) -> Result<ProjectProfile, EngineError> {
        let portability = self.portability_requirement.ok_or(
            EngineError::MissingConfiguration {
                field: "portability_requirement",
            },
        )?;
        let business_type =
            self.business_type
                .clone()
                .ok_or(EngineError::MissingConfiguration {
                    field: "business_type",
                })?;
        let access = self
            .access_requirement
            .ok_or(EngineError::MissingConfiguration {
                field: "access_requirement",
            })?;

        if let Some(budget) = self.budget_constraint {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(EngineError::InvalidConstraint {
                    field: "budget_constraint",
                    value: budget,
                });
            }
        }
        if let Some(timeline) = self.timeline_constraint {
            if !timeline.is_finite() || timeline <= 0.0 {
                return Err(EngineError::InvalidConstraint {
                    field: "timeline_constraint",
                    value: timeline,
                });
            }
        }

        Ok(ProjectProfile {
            portability,
            business_type,
            access,
            budget_constraint: self.budget_constraint,
            timeline_constraint: self.timeline_constraint,
            requested_features: self.requested_features.clone(),
            tech_stack_preference: self.tech_stack_preference.clone(),
        })
    }
}

/// The validated form of [`AdditionalInfo`]: everything the decision logic
/// depends on is present, constraints are positive finite numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub portability: Portability,
    pub business_type: String,
    pub access: AccessRequirement,
    pub budget_constraint: Option<f64>,
    pub timeline_constraint: Option<f64>,
    pub requested_features: Vec<String>,
    pub tech_stack_preference: Option<String>,
}

/// Recommended target platform with reasoning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRecommendation {
    /// Business type from the caller-confirmed profile, not the text signals.
    pub business_type: String,
    pub platform: Platform,
    pub confidence: f64,
    pub reasoning: String,
}

/// One recommended feature with sampled effort and cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecommendation {
    /// Unique within one recommendation.
    pub feature_id: String,
    pub description: String,
    pub priority: Priority,
    /// Weeks, in [2, 8].
    pub estimated_effort_weeks: u32,
    /// USD, in [1000, 5000].
    pub estimated_cost_usd: u32,
}

/// Recommended technology stack with its cost/timeline multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStackRecommendation {
    pub stack_id: String,
    pub name: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub cost_factor: f64,
    pub timeline_factor: f64,
    pub confidence: f64,
}

/// Project cost estimate in USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    pub base_cost: f64,
    pub feature_cost: f64,
    pub total_cost: f64,
    /// (0.8 x total, 1.2 x total)
    pub cost_range: (f64, f64),
}

/// Project timeline estimate in weeks. Mirrors [`CostEstimate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEstimate {
    pub base_weeks: f64,
    pub feature_weeks: f64,
    pub total_weeks: f64,
    /// (0.8 x total, 1.2 x total)
    pub range_weeks: (f64, f64),
}

/// The full recommendation aggregate, immutable once built. A failed engine
/// call never returns one of these partially filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_id: String,
    pub input_analysis: TextSignals,
    pub needs_clarification: bool,
    /// At most 3, in policy priority order.
    pub clarification_questions: Vec<String>,
    pub platform_recommendation: PlatformRecommendation,
    pub feature_recommendations: Vec<FeatureRecommendation>,
    pub tech_stack_recommendation: TechStackRecommendation,
    pub cost_estimate: CostEstimate,
    pub timeline_estimate: TimelineEstimate,
    pub confidence_score: f64,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        input_analysis: TextSignals,
        needs_clarification: bool,
        clarification_questions: Vec<String>,
        platform_recommendation: PlatformRecommendation,
        feature_recommendations: Vec<FeatureRecommendation>,
        tech_stack_recommendation: TechStackRecommendation,
        cost_estimate: CostEstimate,
        timeline_estimate: TimelineEstimate,
        confidence_score: f64,
    ) -> Self {
        Self {
            recommendation_id: Uuid::new_v4().to_string(),
            input_analysis,
            needs_clarification,
            clarification_questions,
            platform_recommendation,
            feature_recommendations,
            tech_stack_recommendation,
            cost_estimate,
            timeline_estimate,
            confidence_score,
            created_at: Utc::now(),
        }
    }
}

/// Round to 2 decimal places, matching the reported-precision convention
/// used throughout the pipeline.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (timeline weeks).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_info() -> AdditionalInfo {
        AdditionalInfo {
            portability_requirement: Some(Portability::Medium),
            business_type: Some("retail".to_string()),
            access_requirement: Some(AccessRequirement::Online),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_complete_info() {
        let profile = full_info().validate().unwrap();
        assert_eq!(profile.business_type, "retail");
        assert_eq!(profile.portability, Portability::Medium);
        assert_eq!(profile.access, AccessRequirement::Online);
    }

    #[test]
    fn test_validate_rejects_missing_portability() {
        let mut info = full_info();
        info.portability_requirement = None;
        let err = info.validate().unwrap_err();
        match err {
            EngineError::MissingConfiguration { field } => {
                assert_eq!(field, "portability_requirement")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_missing_business_type() {
        let mut info = full_info();
        info.business_type = None;
        assert!(matches!(
            info.validate(),
            Err(EngineError::MissingConfiguration {
                field: "business_type"
            })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_access() {
        let mut info = full_info();
        info.access_requirement = None;
        assert!(matches!(
            info.validate(),
            Err(EngineError::MissingConfiguration {
                field: "access_requirement"
            })
        ));
    }

    #[test]
    fn test_validate_rejects_nonpositive_budget() {
        let mut info = full_info();
        info.budget_constraint = Some(0.0);
        assert!(matches!(
            info.validate(),
            Err(EngineError::InvalidConstraint {
                field: "budget_constraint",
                ..
            })
        ));

        info.budget_constraint = Some(f64::NAN);
        assert!(info.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_timeline() {
        let mut info = full_info();
        info.timeline_constraint = Some(-4.0);
        assert!(matches!(
            info.validate(),
            Err(EngineError::InvalidConstraint {
                field: "timeline_constraint",
                ..
            })
        ));
    }

    #[test]
    fn test_platform_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Mobile).unwrap(), "\"mobile\"");
        let p: Platform = serde_json::from_str("\"desktop\"").unwrap();
        assert_eq!(p, Platform::Desktop);
    }

    #[test]
    fn test_round_helpers() {
        assert_eq!(round2(0.337), 0.34);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round1(12.34), 12.3);
    }
}

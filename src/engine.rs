//! Recommendation Engine
//!
//! Combines extracted [`TextSignals`] with validated caller overrides into
//! one [`Recommendation`] aggregate: platform, features, tech stack, cost,
//! timeline and an overall confidence score.
//!
//! The pipeline is strictly linear and call-scoped. The only shared state is
//! the read-only lexicon, so any number of concurrent calls are safe; the
//! only non-determinism is the per-feature effort/cost draw, which is pinned
//! by [`RecommendationEngine::with_seed`] for reproducible runs.

use std::sync::Arc;

use indexmap::IndexSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::analyzer::TextAnalyzer;
use crate::error::EngineError;
use crate::lexicon::{Lexicon, TechStack};
use crate::types::{
    round1, round2, AccessRequirement, AdditionalInfo, CostEstimate, FeatureRecommendation,
    NotificationNeed, Platform, PlatformRecommendation, Portability, Priority, ProjectProfile,
    Recommendation, TechStackRecommendation, TextSignals, TimelineEstimate,
};

/// Placeholder description for feature ids absent from the lexicon.
const NO_DESCRIPTION: &str = "Feature description not available";

/// The orchestrating engine. Stateless across calls apart from the shared
/// read-only lexicon.
pub struct RecommendationEngine {
    lexicon: Arc<Lexicon>,
    analyzer: TextAnalyzer,
    seed: Option<u64>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Engine over the built-in lexicon with entropy-seeded sampling.
    pub fn new() -> Self {
        Self::with_lexicon(Arc::new(Lexicon::builtin()))
    }

    /// Engine over a caller-supplied (possibly externally versioned) lexicon.
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        let analyzer = TextAnalyzer::new(Arc::clone(&lexicon));
        Self {
            lexicon,
            analyzer,
            seed: None,
        }
    }

    /// Pin the effort/cost sampler. Every call then draws the same sequence,
    /// making full recommendations reproducible.
    pub fn with_seed(seed: u64) -> Self {
        let mut engine = Self::new();
        engine.seed = Some(seed);
        engine
    }

    /// Replace the NLP collaborators behind the analyzer.
    pub fn with_analyzer(mut self, analyzer: TextAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Extract signals without running the full pipeline. Interactive
    /// callers use this to decide whether to ask follow-up questions first.
    pub fn analyze_text(&self, text: &str) -> TextSignals {
        self.analyzer.analyze(text)
    }

    pub fn needs_clarification(&self, signals: &TextSignals) -> bool {
        self.analyzer.needs_clarification(signals)
    }

    pub fn generate_clarification_questions(&self, signals: &TextSignals) -> Vec<String> {
        self.analyzer.generate_clarification_questions(signals)
    }

    /// Single entry point: text plus overrides in, full aggregate out.
    /// Fails fast on invalid `info`; never returns a partial recommendation.
    pub fn generate_recommendation(
        &self,
        text: &str,
        info: &AdditionalInfo,
    ) -> Result<Recommendation, EngineError> {
        // 1. Validate the options bag once, at the boundary
        let profile = info.validate()?;

        // 2. Extract signals
        let signals = self.analyzer.analyze(text);

        // 3. Clarification decision
        let needs_clarification = self.analyzer.needs_clarification(&signals);
        let clarification_questions = self.analyzer.generate_clarification_questions(&signals);

        // 4. Platform, features, stack
        let platform_rec = self.recommend_platform(&signals, &profile);
        let mut rng = self.sampler();
        let features = self.recommend_features(&signals, &profile, &mut rng);
        let stack_rec = self.select_tech_stack(&platform_rec, &profile);

        // 5. Cost and timeline under the caller's ceilings
        let cost = self.estimate_cost(&platform_rec, &features, &stack_rec, &profile);
        let timeline = self.estimate_timeline(&platform_rec, &features, &stack_rec, &profile);

        // 6. Blend the confidence score
        let confidence = self.confidence_score(&signals, &platform_rec, features.len());

        debug!(
            platform = platform_rec.platform.name(),
            stack = %stack_rec.stack_id,
            features = features.len(),
            confidence,
            "recommendation generated"
        );

        Ok(Recommendation::new(
            signals,
            needs_clarification,
            clarification_questions,
            platform_rec,
            features,
            stack_rec,
            cost,
            timeline,
            confidence,
        ))
    }

    /// One sampler per call so `&self` stays safe to share across threads.
    fn sampler(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Platform decision, first match wins:
    /// high portability or major notifications -> mobile; low portability or
    /// offline access -> desktop; otherwise the text's detected preference.
    fn recommend_platform(
        &self,
        signals: &TextSignals,
        profile: &ProjectProfile,
    ) -> PlatformRecommendation {
        let business_type = profile.business_type.clone();

        if profile.portability == Portability::High
            || signals.notification_requirement == NotificationNeed::Major
        {
            return PlatformRecommendation {
                business_type,
                platform: Platform::Mobile,
                confidence: 0.95,
                reasoning: "Mobile recommended due to high portability requirement".to_string(),
            };
        }

        if profile.portability == Portability::Low || profile.access == AccessRequirement::Offline {
            return PlatformRecommendation {
                business_type,
                platform: Platform::Desktop,
                confidence: 0.9,
                reasoning: "Desktop recommended due to low portability requirement".to_string(),
            };
        }

        let preferred = signals.platform_preference.platform;
        PlatformRecommendation {
            business_type,
            platform: preferred,
            confidence: 0.9,
            reasoning: format!(
                "{} recommended due to medium portability requirement",
                preferred.title()
            ),
        }
    }

    /// Feature list in priority order: detected categories first (high),
    /// then up to 3 base features for the business type, then explicitly
    /// requested features. Duplicate ids are skipped.
    fn recommend_features(
        &self,
        signals: &TextSignals,
        profile: &ProjectProfile,
        rng: &mut StdRng,
    ) -> Vec<FeatureRecommendation> {
        let mut seen: IndexSet<&str> = IndexSet::new();
        let mut features = Vec::new();

        for feature_id in &signals.detected_features {
            if seen.insert(feature_id) {
                features.push(self.feature(feature_id, Priority::High, rng));
            }
        }

        for feature_id in self.lexicon.base_features(&profile.business_type).iter().take(3) {
            if seen.insert(feature_id) {
                features.push(self.feature(feature_id, Priority::Medium, rng));
            }
        }

        for feature_id in &profile.requested_features {
            if seen.insert(feature_id) {
                features.push(self.feature(feature_id, Priority::Medium, rng));
            }
        }

        features
    }

    fn feature(
        &self,
        feature_id: &str,
        priority: Priority,
        rng: &mut StdRng,
    ) -> FeatureRecommendation {
        FeatureRecommendation {
            feature_id: feature_id.to_string(),
            description: self
                .lexicon
                .feature_description(feature_id)
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            priority,
            estimated_effort_weeks: rng.gen_range(2..=8),
            estimated_cost_usd: rng.gen_range(1000..=5000),
        }
    }

    /// Per-platform default stack with business-type overrides; an explicit
    /// caller preference wins outright. A platform with no registered stacks
    /// yields the non-fatal sentinel.
    fn select_tech_stack(
        &self,
        platform_rec: &PlatformRecommendation,
        profile: &ProjectProfile,
    ) -> TechStackRecommendation {
        let stacks = self.lexicon.stacks_for(platform_rec.platform);
        if stacks.is_empty() {
            warn!(
                platform = platform_rec.platform.name(),
                "no technology stack registered, returning sentinel"
            );
            return TechStackRecommendation {
                stack_id: "unknown".to_string(),
                name: "Unknown".to_string(),
                description: "No technology stack available for this platform".to_string(),
                pros: Vec::new(),
                cons: Vec::new(),
                cost_factor: 1.0,
                timeline_factor: 1.0,
                confidence: 0.0,
            };
        }

        let business = profile.business_type.as_str();
        let default_id = match platform_rec.platform {
            Platform::Mobile => match business {
                "restaurant" | "logistics" => "flutter",
                "healthcare" | "finance" => "react_native",
                _ => "flutter",
            },
            Platform::Web => match business {
                "retail" | "real_estate" => "mern",
                "healthcare" | "finance" => "django",
                "education" => "laravel",
                _ => "mern",
            },
            Platform::Desktop => "electron",
        };

        let chosen_id = profile
            .tech_stack_preference
            .as_deref()
            .unwrap_or(default_id);

        // Unknown ids (including a bad caller preference) fall back to the
        // platform's first registered stack.
        let stack = stacks
            .iter()
            .find(|s| s.id == chosen_id)
            .unwrap_or(&stacks[0]);

        self.stack_recommendation(stack, platform_rec.confidence)
    }

    fn stack_recommendation(&self, stack: &TechStack, confidence: f64) -> TechStackRecommendation {
        TechStackRecommendation {
            stack_id: stack.id.clone(),
            name: stack.name.clone(),
            description: stack.description.clone(),
            pros: stack.pros.clone(),
            cons: stack.cons.clone(),
            cost_factor: stack.cost_factor,
            timeline_factor: stack.timeline_factor,
            confidence,
        }
    }

    /// `(base + sum of feature costs) x stack factor x business multiplier`,
    /// capped at the budget constraint when one was supplied.
    fn estimate_cost(
        &self,
        platform_rec: &PlatformRecommendation,
        features: &[FeatureRecommendation],
        stack_rec: &TechStackRecommendation,
        profile: &ProjectProfile,
    ) -> CostEstimate {
        let base_cost = self.lexicon.base_cost(platform_rec.platform);
        let feature_cost: f64 = features.iter().map(|f| f.estimated_cost_usd as f64).sum();
        let multiplier = self.lexicon.cost_multiplier(&platform_rec.business_type);

        let mut total = (base_cost + feature_cost) * stack_rec.cost_factor * multiplier;
        if let Some(budget) = profile.budget_constraint {
            total = total.min(budget);
        }
        let total = round2(total);

        CostEstimate {
            base_cost,
            feature_cost,
            total_cost: total,
            cost_range: (round2(total * 0.8), round2(total * 1.2)),
        }
    }

    /// Mirrors [`Self::estimate_cost`] in weeks; no business multiplier.
    fn estimate_timeline(
        &self,
        platform_rec: &PlatformRecommendation,
        features: &[FeatureRecommendation],
        stack_rec: &TechStackRecommendation,
        profile: &ProjectProfile,
    ) -> TimelineEstimate {
        let base_weeks = self.lexicon.base_timeline(platform_rec.platform);
        let feature_weeks: f64 = features
            .iter()
            .map(|f| f.estimated_effort_weeks as f64)
            .sum();

        let mut total = (base_weeks + feature_weeks) * stack_rec.timeline_factor;
        if let Some(ceiling) = profile.timeline_constraint {
            total = total.min(ceiling);
        }
        let total = round1(total);

        TimelineEstimate {
            base_weeks,
            feature_weeks,
            total_weeks: total,
            range_weeks: (round1(total * 0.8), round1(total * 1.2)),
        }
    }

    /// Blend of input clarity, classification confidence, platform
    /// confidence and feature coverage, each already bounded to [0, 1].
    fn confidence_score(
        &self,
        signals: &TextSignals,
        platform_rec: &PlatformRecommendation,
        feature_count: usize,
    ) -> f64 {
        round2(
            signals.clarity_score * 0.3
                + signals.business_type.confidence * 0.3
                + platform_rec.confidence * 0.2
                + (feature_count as f64 / 10.0).min(1.0) * 0.2,
        )
    }
}

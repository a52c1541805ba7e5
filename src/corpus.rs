//! Sample requirements corpus for batch and demo callers.
//!
//! The core never reads files: [`CorpusSource`] is the collaborator seam, and
//! a failing loader surfaces an opaque [`CorpusError`]. The built-in
//! [`SampleCorpus`] carries a small in-memory set of labeled requirements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::types::{NotificationNeed, Platform, Portability};

/// One labeled client requirement from the sample corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRequirement {
    pub description: String,
    pub business_type: String,
    pub platform: Platform,
    pub portability: Portability,
    pub notification_requirement: NotificationNeed,
    pub budget: u32,
    pub timeline_weeks: u32,
}

/// Supplier of sample requirements. File- or network-backed implementations
/// live outside the core.
pub trait CorpusSource: Send + Sync {
    fn load(&self) -> Result<Vec<SampleRequirement>, CorpusError>;
}

/// Built-in in-memory corpus.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleCorpus;

impl CorpusSource for SampleCorpus {
    fn load(&self) -> Result<Vec<SampleRequirement>, CorpusError> {
        Ok(builtin_requirements())
    }
}

/// Distribution summary over a loaded corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_entries: usize,
    pub platform_distribution: IndexMap<Platform, usize>,
    pub business_type_distribution: IndexMap<String, usize>,
    /// Budget bands: <20k, 20k-40k, >=40k.
    pub budget_low: usize,
    pub budget_medium: usize,
    pub budget_high: usize,
    /// Timeline bands in weeks: <10, 10-20, >=20.
    pub timeline_short: usize,
    pub timeline_medium: usize,
    pub timeline_long: usize,
}

impl CorpusStats {
    pub fn summarize(requirements: &[SampleRequirement]) -> Self {
        let mut platform_distribution = IndexMap::new();
        let mut business_type_distribution = IndexMap::new();
        let mut stats = Self {
            total_entries: requirements.len(),
            platform_distribution: IndexMap::new(),
            business_type_distribution: IndexMap::new(),
            budget_low: 0,
            budget_medium: 0,
            budget_high: 0,
            timeline_short: 0,
            timeline_medium: 0,
            timeline_long: 0,
        };

        for req in requirements {
            *platform_distribution.entry(req.platform).or_insert(0) += 1;
            *business_type_distribution
                .entry(req.business_type.clone())
                .or_insert(0) += 1;

            match req.budget {
                b if b < 20_000 => stats.budget_low += 1,
                b if b < 40_000 => stats.budget_medium += 1,
                _ => stats.budget_high += 1,
            }
            match req.timeline_weeks {
                w if w < 10 => stats.timeline_short += 1,
                w if w < 20 => stats.timeline_medium += 1,
                _ => stats.timeline_long += 1,
            }
        }

        stats.platform_distribution = platform_distribution;
        stats.business_type_distribution = business_type_distribution;
        stats
    }
}

/// Filter helper for platform-specific batch runs.
pub fn by_platform(
    requirements: &[SampleRequirement],
    platform: Platform,
) -> Vec<SampleRequirement> {
    requirements
        .iter()
        .filter(|req| req.platform == platform)
        .cloned()
        .collect()
}

fn sample(
    description: &str,
    business_type: &str,
    platform: Platform,
    portability: Portability,
    notification: NotificationNeed,
    budget: u32,
    timeline_weeks: u32,
) -> SampleRequirement {
    SampleRequirement {
        description: description.to_string(),
        business_type: business_type.to_string(),
        platform,
        portability,
        notification_requirement: notification,
        budget,
        timeline_weeks,
    }
}

fn builtin_requirements() -> Vec<SampleRequirement> {
    vec![
        sample(
            "I need an online store to sell my products with inventory tracking",
            "retail",
            Platform::Web,
            Portability::Medium,
            NotificationNeed::Minor,
            25_000,
            12,
        ),
        sample(
            "I want a mobile app for food delivery with real-time order tracking",
            "restaurant",
            Platform::Mobile,
            Portability::High,
            NotificationNeed::Major,
            30_000,
            14,
        ),
        sample(
            "A patient appointment scheduling system for my clinic with reminders",
            "healthcare",
            Platform::Web,
            Portability::Medium,
            NotificationNeed::Minor,
            45_000,
            20,
        ),
        sample(
            "An online learning platform with course management and student portal",
            "education",
            Platform::Web,
            Portability::Medium,
            NotificationNeed::Minor,
            35_000,
            18,
        ),
        sample(
            "Fleet tracking with gps, live alerts and route optimization for drivers",
            "logistics",
            Platform::Mobile,
            Portability::High,
            NotificationNeed::Major,
            50_000,
            22,
        ),
        sample(
            "Internal accounting workstation software for the office, works offline",
            "finance",
            Platform::Desktop,
            Portability::Low,
            NotificationNeed::None,
            18_000,
            8,
        ),
        sample(
            "A property listings website with search filters and virtual tours",
            "real_estate",
            Platform::Web,
            Portability::Medium,
            NotificationNeed::None,
            22_000,
            10,
        ),
        sample(
            "Project management and client billing desktop tool for my consultancy",
            "consulting",
            Platform::Desktop,
            Portability::Low,
            NotificationNeed::Minor,
            15_000,
            9,
        ),
        sample(
            "A mobile loyalty program app for my cafe with push notifications",
            "restaurant",
            Platform::Mobile,
            Portability::High,
            NotificationNeed::Major,
            12_000,
            6,
        ),
        sample(
            "Warehouse inventory management with barcode scanning and daily reports",
            "logistics",
            Platform::Desktop,
            Portability::Low,
            NotificationNeed::Minor,
            28_000,
            15,
        ),
    ]
}

//! Lexicon tables: the static, read-only data driving every classification.
//!
//! These are data, not logic. The whole table set is serde-serializable so it
//! can be versioned, overridden and tested independently of the pipeline.
//! All maps are [`IndexMap`]s: iteration order is insertion order, and that
//! order is the documented tie-break for equal keyword-match counts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::Platform;

/// A named technology bundle with its cost and timeline multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStack {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub cost_factor: f64,
    pub timeline_factor: f64,
}

/// The full table set. Construct with [`Lexicon::builtin`] for the production
/// values, or deserialize an externally maintained version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Business category -> classification keywords.
    pub business_keywords: IndexMap<String, Vec<String>>,
    /// Platform -> preference keywords.
    pub platform_keywords: IndexMap<Platform, Vec<String>>,
    /// Feature category -> detection keywords.
    pub feature_keywords: IndexMap<String, Vec<String>>,
    pub urgency_keywords: Vec<String>,
    pub budget_keywords: Vec<String>,
    pub timeline_keywords: Vec<String>,
    /// Time units recognized in timeline indicators.
    pub time_units: Vec<String>,
    pub portability_high: Vec<String>,
    pub portability_medium: Vec<String>,
    pub portability_low: Vec<String>,
    pub notification_major: Vec<String>,
    pub notification_minor: Vec<String>,
    /// Platform -> available stacks, first entry is the platform fallback.
    pub tech_stacks: IndexMap<Platform, Vec<TechStack>>,
    /// Business category -> base feature ids.
    pub business_features: IndexMap<String, Vec<String>>,
    /// Feature id -> human description.
    pub feature_descriptions: IndexMap<String, String>,
    /// Business category -> cost multiplier (1.0 for unlisted categories).
    pub business_cost_multipliers: IndexMap<String, f64>,
    /// Platform -> base development cost in USD.
    pub platform_base_costs: IndexMap<Platform, f64>,
    /// Platform -> base timeline in weeks.
    pub platform_base_timelines: IndexMap<Platform, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Size of the largest business keyword set; the denominator for
    /// business-classification confidence.
    pub fn max_business_keyword_set(&self) -> usize {
        self.business_keywords
            .values()
            .map(|kw| kw.len())
            .max()
            .unwrap_or(1)
    }

    /// Size of the largest platform keyword set.
    pub fn max_platform_keyword_set(&self) -> usize {
        self.platform_keywords
            .values()
            .map(|kw| kw.len())
            .max()
            .unwrap_or(1)
    }

    pub fn stacks_for(&self, platform: Platform) -> &[TechStack] {
        self.tech_stacks
            .get(&platform)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn base_features(&self, business_type: &str) -> &[String] {
        self.business_features
            .get(business_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn feature_description(&self, feature_id: &str) -> Option<&str> {
        self.feature_descriptions.get(feature_id).map(String::as_str)
    }

    pub fn cost_multiplier(&self, business_type: &str) -> f64 {
        self.business_cost_multipliers
            .get(business_type)
            .copied()
            .unwrap_or(1.0)
    }

    pub fn base_cost(&self, platform: Platform) -> f64 {
        self.platform_base_costs
            .get(&platform)
            .copied()
            .unwrap_or(12_000.0)
    }

    pub fn base_timeline(&self, platform: Platform) -> f64 {
        self.platform_base_timelines
            .get(&platform)
            .copied()
            .unwrap_or(10.0)
    }

    /// Load a versioned table set from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The built-in production tables.
    pub fn builtin() -> Self {
        Self {
            business_keywords: business_keywords(),
            platform_keywords: platform_keywords(),
            feature_keywords: feature_keywords(),
            urgency_keywords: words(&[
                "urgent", "asap", "quickly", "fast", "immediate", "emergency", "rush",
            ]),
            budget_keywords: words(&[
                "budget", "cost", "price", "affordable", "cheap", "expensive", "money",
            ]),
            timeline_keywords: words(&[
                "timeline", "deadline", "schedule", "time", "when", "duration",
            ]),
            time_units: words(&["week", "month", "year", "day", "hour"]),
            portability_high: words(&[
                "mobile",
                "phone",
                "smartphone",
                "tablet",
                "ios",
                "android",
                "on-the-go",
                "portable",
                "travel",
                "remote",
                "field",
                "outdoor",
                "delivery",
                "tracking",
                "location",
                "gps",
                "real-time",
                "instant",
                "anywhere",
                "everywhere",
                "accessible",
                "mobile-first",
                "responsive",
            ]),
            portability_medium: words(&[
                "web",
                "website",
                "online",
                "browser",
                "responsive",
                "tablet-friendly",
                "cross-platform",
                "accessible",
                "remote access",
                "cloud-based",
            ]),
            portability_low: words(&[
                "desktop",
                "computer",
                "pc",
                "workstation",
                "office",
                "stationary",
                "fixed",
                "local",
                "internal",
                "enterprise",
                "corporate",
            ]),
            notification_major: words(&[
                "notification",
                "alert",
                "push",
                "real-time",
                "instant",
                "immediate",
                "urgent",
                "emergency",
                "critical",
                "important",
                "reminder",
                "ping",
                "message",
                "update",
                "status",
                "tracking",
                "monitoring",
                "live",
                "notify",
                "alarm",
                "warning",
                "announcement",
                "broadcast",
            ]),
            notification_minor: words(&[
                "email",
                "report",
                "summary",
                "daily",
                "weekly",
                "monthly",
                "newsletter",
                "update",
                "news",
                "information",
                "communication",
            ]),
            tech_stacks: tech_stacks(),
            business_features: business_features(),
            feature_descriptions: feature_descriptions(),
            business_cost_multipliers: business_cost_multipliers(),
            platform_base_costs: IndexMap::from([
                (Platform::Mobile, 15_000.0),
                (Platform::Web, 12_000.0),
                (Platform::Desktop, 10_000.0),
            ]),
            platform_base_timelines: IndexMap::from([
                (Platform::Mobile, 12.0),
                (Platform::Web, 10.0),
                (Platform::Desktop, 8.0),
            ]),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

// ============================================================================
// TABLE DEFINITIONS
// ============================================================================

fn business_keywords() -> IndexMap<String, Vec<String>> {
    let mut map = IndexMap::new();
    map.insert(
        "retail".to_string(),
        words(&[
            "store",
            "shop",
            "retail",
            "ecommerce",
            "online store",
            "marketplace",
            "selling",
            "products",
        ]),
    );
    map.insert(
        "restaurant".to_string(),
        words(&[
            "restaurant", "food", "delivery", "takeout", "dining", "cafe", "menu", "kitchen",
        ]),
    );
    map.insert(
        "healthcare".to_string(),
        words(&[
            "medical",
            "healthcare",
            "clinic",
            "hospital",
            "patient",
            "doctor",
            "health",
            "medicine",
        ]),
    );
    map.insert(
        "education".to_string(),
        words(&[
            "school", "education", "learning", "course", "training", "academy", "student",
            "teaching",
        ]),
    );
    map.insert(
        "logistics".to_string(),
        words(&[
            "logistics",
            "shipping",
            "delivery",
            "warehouse",
            "supply chain",
            "transport",
            "freight",
        ]),
    );
    map.insert(
        "finance".to_string(),
        words(&[
            "banking",
            "finance",
            "investment",
            "accounting",
            "budget",
            "money",
            "financial",
        ]),
    );
    map.insert(
        "real_estate".to_string(),
        words(&[
            "real estate",
            "property",
            "housing",
            "rental",
            "mortgage",
            "realty",
            "home",
        ]),
    );
    map.insert(
        "consulting".to_string(),
        words(&[
            "consulting",
            "consultant",
            "advisory",
            "professional services",
            "business advice",
        ]),
    );
    map
}

fn platform_keywords() -> IndexMap<Platform, Vec<String>> {
    let mut map = IndexMap::new();
    map.insert(
        Platform::Mobile,
        words(&["mobile", "phone", "android", "ios", "smartphone", "tablet"]),
    );
    map.insert(
        Platform::Web,
        words(&[
            "website",
            "web",
            "online",
            "browser",
            "internet",
            "web application",
        ]),
    );
    map.insert(
        Platform::Desktop,
        words(&[
            "desktop",
            "computer",
            "pc",
            "software",
            "application",
            "program",
        ]),
    );
    map
}

fn feature_keywords() -> IndexMap<String, Vec<String>> {
    let mut map = IndexMap::new();
    map.insert(
        "inventory".to_string(),
        words(&["inventory", "stock", "products", "items", "catalog"]),
    );
    map.insert(
        "payment".to_string(),
        words(&["payment", "billing", "checkout", "pay", "money", "transaction"]),
    );
    map.insert(
        "tracking".to_string(),
        words(&["tracking", "monitoring", "analytics", "reports", "dashboard"]),
    );
    map.insert(
        "user_management".to_string(),
        words(&["users", "accounts", "profiles", "registration", "login"]),
    );
    map.insert(
        "communication".to_string(),
        words(&["chat", "messaging", "email", "notifications", "alerts"]),
    );
    map.insert(
        "scheduling".to_string(),
        words(&[
            "appointments",
            "booking",
            "calendar",
            "schedule",
            "reservations",
        ]),
    );
    map.insert(
        "reporting".to_string(),
        words(&["reports", "analytics", "statistics", "data", "insights"]),
    );
    map
}

fn stack(
    id: &str,
    name: &str,
    description: &str,
    pros: &[&str],
    cons: &[&str],
    cost_factor: f64,
    timeline_factor: f64,
) -> TechStack {
    TechStack {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        pros: words(pros),
        cons: words(cons),
        cost_factor,
        timeline_factor,
    }
}

fn tech_stacks() -> IndexMap<Platform, Vec<TechStack>> {
    let mut map = IndexMap::new();
    map.insert(
        Platform::Mobile,
        vec![
            stack(
                "flutter",
                "Flutter + Firebase",
                "Cross-platform mobile development with cloud backend",
                &["Cross-platform", "Fast development", "Rich UI components"],
                &["Limited native features", "Large app size"],
                1.0,
                1.0,
            ),
            stack(
                "react_native",
                "React Native + Node.js",
                "JavaScript-based mobile development",
                &["Cross-platform", "Large community", "Reusable code"],
                &["Performance issues", "Native dependencies"],
                0.9,
                1.1,
            ),
            stack(
                "native_ios",
                "Swift + iOS Native",
                "Native iOS development",
                &["Best performance", "Full iOS features", "App Store optimization"],
                &["iOS only", "Higher cost", "Longer timeline"],
                1.3,
                1.4,
            ),
            stack(
                "native_android",
                "Kotlin + Android Native",
                "Native Android development",
                &[
                    "Best performance",
                    "Full Android features",
                    "Google Play optimization",
                ],
                &["Android only", "Higher cost", "Longer timeline"],
                1.2,
                1.3,
            ),
        ],
    );
    map.insert(
        Platform::Web,
        vec![
            stack(
                "mern",
                "MERN Stack (MongoDB, Express, React, Node.js)",
                "Full-stack JavaScript development",
                &["Fast development", "Large ecosystem", "Scalable"],
                &["JavaScript everywhere", "Learning curve"],
                0.8,
                0.9,
            ),
            stack(
                "mean",
                "MEAN Stack (MongoDB, Express, Angular, Node.js)",
                "Full-stack JavaScript with Angular",
                &[
                    "TypeScript support",
                    "Enterprise-ready",
                    "Comprehensive framework",
                ],
                &["Steep learning curve", "Heavy framework"],
                1.0,
                1.1,
            ),
            stack(
                "django",
                "Django + PostgreSQL",
                "Python-based web development",
                &["Rapid development", "Built-in admin", "Security features"],
                &["Less flexible", "Monolithic"],
                0.9,
                0.8,
            ),
            stack(
                "laravel",
                "Laravel + MySQL",
                "PHP-based web development",
                &["Elegant syntax", "Rich ecosystem", "Easy deployment"],
                &["PHP ecosystem", "Performance concerns"],
                0.7,
                0.9,
            ),
        ],
    );
    map.insert(
        Platform::Desktop,
        vec![
            stack(
                "electron",
                "Electron + React",
                "Cross-platform desktop development",
                &["Cross-platform", "Web technologies", "Rapid development"],
                &["Large app size", "Memory usage", "Security concerns"],
                0.8,
                0.9,
            ),
            stack(
                "qt",
                "Qt + Python",
                "Native desktop development",
                &["Native performance", "Cross-platform", "Rich UI"],
                &["Complex setup", "Licensing costs"],
                1.1,
                1.2,
            ),
            stack(
                "wpf",
                "WPF + C#",
                "Windows desktop development",
                &["Native Windows", "Rich UI", "Good performance"],
                &["Windows only", "Microsoft ecosystem"],
                1.0,
                1.0,
            ),
        ],
    );
    map
}

fn business_features() -> IndexMap<String, Vec<String>> {
    let mut map = IndexMap::new();
    map.insert(
        "retail".to_string(),
        words(&[
            "inventory_management",
            "payment_processing",
            "order_tracking",
            "customer_management",
            "analytics_dashboard",
            "multi_vendor_support",
        ]),
    );
    map.insert(
        "restaurant".to_string(),
        words(&[
            "menu_management",
            "online_ordering",
            "delivery_tracking",
            "reservation_system",
            "kitchen_display",
            "loyalty_program",
        ]),
    );
    map.insert(
        "healthcare".to_string(),
        words(&[
            "patient_management",
            "appointment_scheduling",
            "medical_records",
            "billing_system",
            "prescription_management",
            "telemedicine",
        ]),
    );
    map.insert(
        "education".to_string(),
        words(&[
            "course_management",
            "student_portal",
            "progress_tracking",
            "video_streaming",
            "assignment_submission",
            "grade_management",
        ]),
    );
    map.insert(
        "logistics".to_string(),
        words(&[
            "route_optimization",
            "real_time_tracking",
            "inventory_management",
            "driver_app",
            "warehouse_management",
            "analytics_dashboard",
        ]),
    );
    map.insert(
        "finance".to_string(),
        words(&[
            "account_management",
            "transaction_history",
            "budget_tracking",
            "financial_reports",
            "investment_portfolio",
            "loan_management",
        ]),
    );
    map.insert(
        "real_estate".to_string(),
        words(&[
            "property_listings",
            "search_filters",
            "virtual_tours",
            "contact_forms",
            "lead_management",
            "property_analytics",
        ]),
    );
    map.insert(
        "consulting".to_string(),
        words(&[
            "project_management",
            "time_tracking",
            "client_billing",
            "report_generation",
            "resource_management",
            "knowledge_base",
        ]),
    );
    map
}

fn feature_descriptions() -> IndexMap<String, String> {
    let entries: &[(&str, &str)] = &[
        (
            "inventory_management",
            "Track and manage product inventory in real-time",
        ),
        (
            "payment_processing",
            "Secure payment processing with multiple payment methods",
        ),
        (
            "order_tracking",
            "Real-time order status tracking for customers",
        ),
        (
            "customer_management",
            "Comprehensive customer database and relationship management",
        ),
        (
            "analytics_dashboard",
            "Business intelligence and performance analytics",
        ),
        (
            "multi_vendor_support",
            "Support for multiple vendors and suppliers",
        ),
        (
            "menu_management",
            "Dynamic menu creation and management system",
        ),
        ("online_ordering", "Online food ordering and delivery system"),
        (
            "delivery_tracking",
            "Real-time delivery tracking for customers",
        ),
        (
            "reservation_system",
            "Table reservation and booking management",
        ),
        (
            "kitchen_display",
            "Kitchen order display and management system",
        ),
        ("loyalty_program", "Customer loyalty and rewards program"),
        (
            "patient_management",
            "Comprehensive patient information management",
        ),
        (
            "appointment_scheduling",
            "Automated appointment booking and scheduling",
        ),
        (
            "medical_records",
            "Secure electronic health records management",
        ),
        ("billing_system", "Automated billing and insurance processing"),
        (
            "prescription_management",
            "Digital prescription and medication tracking",
        ),
        (
            "telemedicine",
            "Video consultation and remote healthcare services",
        ),
        ("course_management", "Learning management system for courses"),
        ("student_portal", "Student dashboard and self-service portal"),
        (
            "progress_tracking",
            "Student progress monitoring and assessment",
        ),
        ("video_streaming", "Educational video content delivery"),
        (
            "assignment_submission",
            "Digital assignment submission and grading",
        ),
        (
            "grade_management",
            "Automated grading and transcript management",
        ),
        (
            "route_optimization",
            "AI-powered route planning and optimization",
        ),
        (
            "real_time_tracking",
            "GPS-based real-time location tracking",
        ),
        (
            "driver_app",
            "Mobile application for drivers and delivery personnel",
        ),
        (
            "warehouse_management",
            "Inventory and warehouse operations management",
        ),
        (
            "account_management",
            "Banking account and transaction management",
        ),
        (
            "transaction_history",
            "Detailed transaction history and statements",
        ),
        ("budget_tracking", "Personal and business budget management"),
        (
            "financial_reports",
            "Comprehensive financial reporting and analytics",
        ),
        (
            "investment_portfolio",
            "Investment tracking and portfolio management",
        ),
        ("loan_management", "Loan application and management system"),
        (
            "property_listings",
            "Real estate property listing and showcase",
        ),
        ("search_filters", "Advanced property search and filtering"),
        ("virtual_tours", "360-degree virtual property tours"),
        ("contact_forms", "Lead capture and contact management"),
        ("lead_management", "Sales lead tracking and management"),
        (
            "property_analytics",
            "Real estate market analytics and insights",
        ),
        (
            "project_management",
            "Comprehensive project planning and tracking",
        ),
        ("time_tracking", "Employee time tracking and billing"),
        ("client_billing", "Automated client billing and invoicing"),
        (
            "report_generation",
            "Automated report generation and delivery",
        ),
        (
            "resource_management",
            "Team and resource allocation management",
        ),
        (
            "knowledge_base",
            "Documentation and knowledge management system",
        ),
        (
            "tracking",
            "Real-time activity and data tracking with analytics",
        ),
    ];
    entries
        .iter()
        .map(|(id, desc)| (id.to_string(), desc.to_string()))
        .collect()
}

fn business_cost_multipliers() -> IndexMap<String, f64> {
    let mut map = IndexMap::new();
    map.insert("healthcare".to_string(), 1.3); // compliance overhead
    map.insert("finance".to_string(), 1.4); // security overhead
    map.insert("logistics".to_string(), 1.2);
    map.insert("retail".to_string(), 1.0);
    map.insert("restaurant".to_string(), 0.9);
    map.insert("education".to_string(), 1.1);
    map.insert("real_estate".to_string(), 1.0);
    map.insert("consulting".to_string(), 0.9);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_business_categories() {
        let lex = Lexicon::builtin();
        let categories: Vec<_> = lex.business_keywords.keys().cloned().collect();
        assert_eq!(
            categories,
            vec![
                "retail",
                "restaurant",
                "healthcare",
                "education",
                "logistics",
                "finance",
                "real_estate",
                "consulting"
            ],
            "category order is the documented tie-break order"
        );
    }

    #[test]
    fn test_builtin_has_all_platforms() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.platform_keywords.len(), 3);
        assert_eq!(lex.tech_stacks.len(), 3);
        assert_eq!(lex.stacks_for(Platform::Mobile).len(), 4);
        assert_eq!(lex.stacks_for(Platform::Web).len(), 4);
        assert_eq!(lex.stacks_for(Platform::Desktop).len(), 3);
    }

    #[test]
    fn test_builtin_has_seven_feature_categories() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.feature_keywords.len(), 7);
    }

    #[test]
    fn test_max_business_keyword_set() {
        let lex = Lexicon::builtin();
        // retail/restaurant/healthcare/education each carry 8 keywords
        assert_eq!(lex.max_business_keyword_set(), 8);
        assert_eq!(lex.max_platform_keyword_set(), 6);
    }

    #[test]
    fn test_every_base_feature_has_description() {
        let lex = Lexicon::builtin();
        for (business, features) in &lex.business_features {
            for feature in features {
                assert!(
                    lex.feature_description(feature).is_some(),
                    "missing description for {feature} ({business})"
                );
            }
        }
    }

    #[test]
    fn test_stack_ids_unique_per_platform() {
        let lex = Lexicon::builtin();
        for (platform, stacks) in &lex.tech_stacks {
            let mut ids: Vec<_> = stacks.iter().map(|s| s.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), stacks.len(), "duplicate stack id for {platform:?}");
        }
    }

    #[test]
    fn test_stack_factors_positive() {
        let lex = Lexicon::builtin();
        for stacks in lex.tech_stacks.values() {
            for stack in stacks {
                assert!(stack.cost_factor > 0.0);
                assert!(stack.timeline_factor > 0.0);
            }
        }
    }

    #[test]
    fn test_multiplier_defaults() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.cost_multiplier("finance"), 1.4);
        assert_eq!(lex.cost_multiplier("unlisted_category"), 1.0);
        assert_eq!(lex.base_cost(Platform::Mobile), 15_000.0);
        assert_eq!(lex.base_timeline(Platform::Desktop), 8.0);
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let lex = Lexicon::builtin();
        let json = serde_json::to_string(&lex).unwrap();
        let parsed = Lexicon::from_json(&json).unwrap();
        let original: Vec<_> = lex.business_keywords.keys().collect();
        let restored: Vec<_> = parsed.business_keywords.keys().collect();
        assert_eq!(original, restored);
        assert_eq!(parsed.stacks_for(Platform::Web).len(), 4);
    }
}

use gc_core::Severity;
use serde::{Deserialize, Serialize};

/// Keyword-triggered category used by the fallback classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
    /// Not added when any of these categories was already detected.
    pub suppressed_by: Vec<String>,
}

/// Routing entry: matches when any category contains any keyword (case-insensitive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRule {
    pub category_keywords: Vec<String>,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub category_rules: Vec<CategoryRule>,
    pub default_category: String,
    pub elevated_keywords: Vec<String>,
    pub elevated_severity: Severity,
    pub default_severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymityConfig {
    pub sensitive_categories: Vec<String>,
    pub fear_indicators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingTable {
    pub rules: Vec<RouteRule>,
    pub default_department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaTable {
    pub hours: Vec<(Severity, u32)>,
    pub default_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationConfig {
    pub severity_triggers: Vec<(Severity, Vec<String>)>,
    /// Keyed by a category name matched as a substring of classified categories.
    pub category_triggers: Vec<(String, Vec<String>)>,
    pub max_triggers: usize,
    pub placeholder_trigger: String,
}

/// Every table the rule engine consults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTables {
    pub fallback: FallbackConfig,
    pub anonymity: AnonymityConfig,
    pub routing: RoutingTable,
    pub sla: SlaTable,
    pub explanation: ExplanationConfig,
}

//! Deterministic keyword classifier used when generator output is unusable.

use crate::contains_any;
use crate::types::FallbackConfig;
use gc_core::BaseClassification;

/// Classify by keyword tables. Total and deterministic; never returns an empty
/// category list and never yields `Critical`.
pub fn fallback_classify(complaint: &str, config: &FallbackConfig) -> BaseClassification {
    let text = complaint.to_lowercase();

    let mut categories: Vec<String> = Vec::new();
    for rule in &config.category_rules {
        if !contains_any(&text, &rule.keywords) {
            continue;
        }
        if categories.contains(&rule.category) {
            continue;
        }
        if rule.suppressed_by.iter().any(|s| categories.contains(s)) {
            continue;
        }
        categories.push(rule.category.clone());
    }

    if categories.is_empty() {
        categories.push(config.default_category.clone());
    }

    let severity = if contains_any(&text, &config.elevated_keywords) {
        config.elevated_severity
    } else {
        config.default_severity
    };

    tracing::debug!(?categories, %severity, "fallback classification");
    BaseClassification::new(categories, severity)
}

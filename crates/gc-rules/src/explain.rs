//! Human-readable justification for a finished classification.

use crate::types::ExplanationConfig;
use gc_core::{Classification, Explanation, Severity};

/// Collect trigger keywords present in `complaint`, severity list first, then
/// per-category lists, de-duplicated and capped at `max_triggers`.
pub fn key_triggers(classification: &Classification, complaint: &str, config: &ExplanationConfig) -> Vec<String> {
    let text = complaint.to_lowercase();
    let mut triggers: Vec<String> = Vec::new();
    let mut push = |kw: &String| {
        if text.contains(kw.as_str()) && !triggers.contains(kw) {
            triggers.push(kw.clone());
        }
    };

    let severity_keywords = config
        .severity_triggers
        .iter()
        .filter(|(s, _)| *s == classification.severity)
        .flat_map(|(_, kws)| kws);
    severity_keywords.for_each(&mut push);

    for category in &classification.categories {
        let category = category.to_lowercase();
        for (name, keywords) in &config.category_triggers {
            if category.contains(&name.to_lowercase()) {
                keywords.iter().for_each(&mut push);
            }
        }
    }

    triggers.truncate(config.max_triggers);
    if triggers.is_empty() {
        triggers.push(config.placeholder_trigger.clone());
    }
    triggers
}

pub fn summary_reason(classification: &Classification) -> String {
    let categories = classification.categories.join(", ").to_lowercase();
    match classification.severity {
        Severity::Critical => {
            let mut reason = format!("Classified as Critical due to {categories}");
            if classification.anonymous_recommended {
                reason.push_str(" with power imbalance indicators");
            }
            reason
        }
        Severity::High => format!("Classified as High - {categories} requiring urgent attention"),
        Severity::Normal => format!("Classified as Normal - general {categories}"),
    }
}

pub fn explain(classification: &Classification, complaint: &str, config: &ExplanationConfig) -> Explanation {
    Explanation {
        summary_reason: summary_reason(classification),
        key_triggers: key_triggers(classification, complaint, config),
    }
}

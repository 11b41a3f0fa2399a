//! Anonymity, escalation and SLA derivations.

use crate::contains_any;
use crate::types::{AnonymityConfig, SlaTable};
use gc_core::Severity;

/// True when a category looks sensitive or the text shows fear of the accused.
pub fn anonymous_recommended(categories: &[String], complaint: &str, config: &AnonymityConfig) -> bool {
    let sensitive = categories.iter().any(|cat| {
        let cat = cat.to_lowercase();
        contains_any(&cat, &config.sensitive_categories)
    });
    sensitive || contains_any(&complaint.to_lowercase(), &config.fear_indicators)
}

/// Only `Critical` escalates.
pub fn escalation_required(severity: &str) -> bool {
    severity == Severity::Critical.as_str()
}

/// SLA for a severity label; unknown labels get the table default.
pub fn sla_hours(severity: &str, table: &SlaTable) -> u32 {
    table
        .hours
        .iter()
        .find(|(s, _)| s.as_str() == severity)
        .map(|(_, h)| *h)
        .unwrap_or(table.default_hours)
}

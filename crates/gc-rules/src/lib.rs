//! Grievance rule engine: keyword fallback classifier, operational derivations
//! (anonymity, escalation, routing, SLA) and explanations.
//!
//! All tables are ordered `(match-set, outcome)` lists evaluated first-match-wins.

pub mod config;
pub mod explain;
pub mod fallback;
pub mod policy;
pub mod selector;
pub mod types;

pub use config::{default_rule_tables, RULE_TABLES};
pub use explain::explain;
pub use fallback::fallback_classify;
pub use policy::{anonymous_recommended, escalation_required, sla_hours};
pub use selector::route_to;
pub use types::*;

use gc_core::{BaseClassification, Classification};

/// Substring match of any of `needles` in an already-lowercased `haystack`.
pub(crate) fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.to_lowercase().as_str()))
}

/// Extend a base classification with the derived operational fields.
pub fn derive_classification(base: &BaseClassification, complaint: &str, tables: &RuleTables) -> Classification {
    let severity = base.severity.as_str();
    Classification {
        categories: base.categories.clone(),
        severity: base.severity,
        anonymous_recommended: anonymous_recommended(&base.categories, complaint, &tables.anonymity),
        escalation_required: escalation_required(severity),
        route_to: route_to(&base.categories, &tables.routing).to_string(),
        sla_hours: sla_hours(severity, &tables.sla),
    }
}

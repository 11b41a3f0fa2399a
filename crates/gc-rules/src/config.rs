//! Default keyword tables.

use crate::types::*;
use gc_core::Severity;

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, keywords: &[&str], suppressed_by: &[&str]) -> CategoryRule {
    CategoryRule { category: name.into(), keywords: s(keywords), suppressed_by: s(suppressed_by) }
}

fn route(keywords: &[&str], department: &str) -> RouteRule {
    RouteRule { category_keywords: s(keywords), department: department.into() }
}

fn default_fallback() -> FallbackConfig {
    FallbackConfig {
        category_rules: vec![
            category(
                "Harassment",
                &["harassment", "harass", "bully", "abuse", "discriminate", "threaten", "assault", "scold"],
                &[],
            ),
            category(
                "Infrastructure",
                &[
                    "water", "cooler", "drink", "fountain", "ac", "air", "conditioning",
                    "temperature", "hot", "cold", "toilet", "bathroom", "washroom",
                    "restroom", "broken", "repair", "maintenance",
                ],
                &[],
            ),
            category(
                "Academic",
                &[
                    "grade", "marks", "exam", "test", "class", "professor", "teacher",
                    "lecture", "assignment", "homework",
                ],
                &["Harassment"],
            ),
        ],
        default_category: "Other".into(),
        elevated_keywords: s(&["urgent", "critical", "emergency", "immediately", "harassment", "harass", "assault"]),
        elevated_severity: Severity::High,
        default_severity: Severity::Normal,
    }
}

fn default_anonymity() -> AnonymityConfig {
    AnonymityConfig {
        sensitive_categories: s(&[
            "Workplace Harassment", "Abuse of Authority", "Discrimination or Bias",
            "Sexual Harassment", "Corruption or Bribery", "Fraud", "Retaliation", "Whistleblowing",
        ]),
        fear_indicators: s(&[
            "scared", "afraid", "fear", "retaliation", "threatened",
            "controls my", "power over", "dependent on", "blackmail",
        ]),
    }
}

fn default_routing() -> RoutingTable {
    RoutingTable {
        rules: vec![
            route(&["Workplace Harassment", "Sexual Harassment", "Abuse of Authority"], "Internal Complaints Committee"),
            route(&["Corruption or Bribery", "Fraud"], "Vigilance / Ethics Office"),
            route(&["Discrimination or Bias"], "Diversity & Inclusion Office"),
            route(&["Safety Hazard"], "Health & Safety Department"),
            route(&["Mental Health or Stress"], "Employee Wellness / HR"),
            route(&["Academic Misconduct"], "Academic Affairs / Disciplinary Committee"),
            route(&["Infrastructure or Facility Issue", "Service Issue"], "Operations / Facilities Management"),
            route(&["HR"], "Human Resources"),
        ],
        default_department: "Customer Support / General Grievance Cell".into(),
    }
}

fn default_sla() -> SlaTable {
    SlaTable {
        hours: vec![(Severity::Critical, 24), (Severity::High, 72), (Severity::Normal, 168)],
        default_hours: 168,
    }
}

fn default_explanation() -> ExplanationConfig {
    ExplanationConfig {
        severity_triggers: vec![
            (Severity::Critical, s(&[
                "harassment", "harass", "abuse", "threatened", "scared", "afraid",
                "corruption", "bribery", "fraud", "blackmail", "unsafe", "fire", "safety",
            ])),
            (Severity::High, s(&["repeated", "multiple", "ongoing", "persistent", "unresolved", "weeks", "months"])),
        ],
        category_triggers: vec![
            ("Workplace Harassment".into(), s(&["comments", "body", "stares", "follows", "unwanted"])),
            ("Abuse of Authority".into(), s(&["controls", "authority", "boss", "supervisor", "power"])),
            ("Corruption or Bribery".into(), s(&["pay", "money", "bribe", "rupees", "cash"])),
            ("Safety Hazard".into(), s(&["fire", "broken", "unsafe", "dangerous", "equipment"])),
            ("Discrimination or Bias".into(), s(&["bias", "discriminate", "caste", "religion", "gender"])),
            ("Infrastructure or Facility Issue".into(), s(&["not working", "broken", "faulty", "wifi"])),
        ],
        max_triggers: 5,
        placeholder_trigger: "general complaint indicators".into(),
    }
}

/// Default rule tables.
pub fn default_rule_tables() -> RuleTables {
    RuleTables {
        fallback: default_fallback(),
        anonymity: default_anonymity(),
        routing: default_routing(),
        sla: default_sla(),
        explanation: default_explanation(),
    }
}

/// The default tables instance.
pub static RULE_TABLES: std::sync::LazyLock<RuleTables> = std::sync::LazyLock::new(default_rule_tables);

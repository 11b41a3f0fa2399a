use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed severity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Normal,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::High, Severity::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Normal => "Normal",
        }
    }

    /// Case-insensitive lookup of a free-text label. Surrounding whitespace is ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(label))
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized output of the classification protocol.
///
/// `categories` is never empty once it leaves the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseClassification {
    pub categories: Vec<String>,
    pub severity: Severity,
}

impl BaseClassification {
    pub fn new(categories: Vec<String>, severity: Severity) -> Self {
        Self { categories, severity }
    }
}

/// Response-facing classification with derived operational fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub categories: Vec<String>,
    pub severity: Severity,
    pub anonymous_recommended: bool,
    pub escalation_required: bool,
    pub route_to: String,
    pub sla_hours: u32,
}

impl Classification {
    pub const MANUAL_REVIEW_ROUTE: &'static str = "Error - Manual Review Required";

    /// Placeholder used in place of a batch item that could not be classified.
    pub fn manual_review() -> Self {
        Self {
            categories: vec!["Error".into()],
            severity: Severity::Normal,
            anonymous_recommended: false,
            escalation_required: false,
            route_to: Self::MANUAL_REVIEW_ROUTE.into(),
            sla_hours: 168,
        }
    }

    pub fn is_manual_review(&self) -> bool {
        self.route_to == Self::MANUAL_REVIEW_ROUTE
    }
}

/// Human-readable justification of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub summary_reason: String,
    pub key_triggers: Vec<String>,
}

//! Generate, parse, retry once with a stricter prompt, else keyword fallback.

use crate::ComplaintClassifier;
use gc_core::{BaseClassification, Severity};
use gc_generator::{build_request, PromptMode};
use gc_parser::{parse_output, ParseMethod, ParsedOutput};
use gc_rules::fallback_classify;
use std::fmt;
use tracing::{debug, info, warn};

const ATTEMPTS: [PromptMode; 2] = [PromptMode::Lenient, PromptMode::Strict];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    GeneratorFault,
    DegenerateOutput,
    Unparseable,
}

/// How the base classification was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Parsed(ParseMethod),
    Fallback(FallbackReason),
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(method) => write!(f, "parsed:{method}"),
            Self::Fallback(reason) => write!(f, "fallback:{reason:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOutcome {
    pub classification: BaseClassification,
    pub resolution: Resolution,
    /// Generator calls made, at most two.
    pub generations: u8,
}

impl BaseOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.resolution, Resolution::Fallback(_))
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Trim categories, drop blanks and map the severity onto the closed scale.
/// `None` when no category survives.
pub fn normalize(parsed: ParsedOutput) -> Option<BaseClassification> {
    let categories: Vec<String> = parsed
        .categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();
    if categories.is_empty() {
        warn!("generator output has no categories");
        return None;
    }
    let severity = Severity::from_label(&parsed.severity).unwrap_or_else(|| {
        warn!(severity = %parsed.severity, "severity outside Critical/High/Normal, using Normal");
        Severity::Normal
    });
    Some(BaseClassification::new(categories, severity))
}

impl ComplaintClassifier {
    /// Run the generation protocol. Never fails: every error path ends in the
    /// keyword fallback, so the result always has at least one category.
    pub async fn classify_base(&self, complaint: &str) -> BaseOutcome {
        let mut generations = 0u8;

        for mode in ATTEMPTS {
            if mode == PromptMode::Strict {
                info!("first attempt unparseable, retrying with strict prompt");
            }
            generations += 1;

            let request = build_request(complaint, mode, &self.params);
            let raw = match self.generator.generate(&request).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(error = %e, attempt = generations, "generator fault, using fallback");
                    return self.fallback(complaint, FallbackReason::GeneratorFault, generations);
                }
            };
            debug!(attempt = generations, raw = %preview(&raw, self.config.log_preview_chars), "generator output");

            if raw.trim().chars().count() < self.config.min_output_chars {
                warn!(attempt = generations, "empty or too short output, using fallback");
                return self.fallback(complaint, FallbackReason::DegenerateOutput, generations);
            }

            if let Some((classification, method)) = parse_output(&raw, &self.parsers, normalize) {
                info!(%method, categories = ?classification.categories, severity = %classification.severity, "classified");
                return BaseOutcome { classification, resolution: Resolution::Parsed(method), generations };
            }
        }

        warn!("all parsing failed, using fallback");
        self.fallback(complaint, FallbackReason::Unparseable, generations)
    }

    fn fallback(&self, complaint: &str, reason: FallbackReason, generations: u8) -> BaseOutcome {
        BaseOutcome {
            classification: fallback_classify(complaint, &self.tables.fallback),
            resolution: Resolution::Fallback(reason),
            generations,
        }
    }
}

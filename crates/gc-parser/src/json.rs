//! Embedded JSON object extraction.

use crate::{traits::OutputParser, ParseMethod, ParsedOutput};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawClassification {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default = "default_severity")]
    severity: String,
}

fn default_severity() -> String {
    "Normal".into()
}

/// Slices from the first `{` to the last `}` and parses that strictly.
///
/// No repair is attempted: trailing commas, single quotes or truncated objects all
/// count as no match.
pub struct JsonObjectParser;

impl JsonObjectParser {
    pub fn new() -> Self { Self }

    /// The candidate object text, if a `{ ... }` pair exists in the right order.
    pub fn candidate(raw: &str) -> Option<&str> {
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        (end > start).then(|| &raw[start..=end])
    }
}

impl OutputParser for JsonObjectParser {
    fn parse(&self, raw: &str) -> Option<ParsedOutput> {
        let candidate = Self::candidate(raw)?;
        match serde_json::from_str::<RawClassification>(candidate) {
            Ok(obj) => Some(ParsedOutput::new(obj.categories, obj.severity)),
            Err(e) => {
                tracing::trace!(error = %e, "embedded JSON rejected");
                None
            }
        }
    }

    fn method(&self) -> ParseMethod {
        ParseMethod::JsonObject
    }
}

impl Default for JsonObjectParser {
    fn default() -> Self { Self::new() }
}

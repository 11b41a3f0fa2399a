//! Recovery of structured classifications from free-text generator output.
//!
//! Strategies are tried in a fixed order and the first match wins. Parsing never
//! fails loudly: malformed input yields `None`.

pub mod json;
pub mod native;
pub mod traits;

pub use json::JsonObjectParser;
pub use native::NativeFormatParser;
pub use traits::OutputParser;

use std::fmt;

/// Classification recovered from raw text, before normalization.
///
/// `severity` is the raw label as written by the generator and is not checked
/// against the closed severity scale here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOutput {
    pub categories: Vec<String>,
    pub severity: String,
}

impl ParsedOutput {
    pub fn new(categories: Vec<String>, severity: impl Into<String>) -> Self {
        Self { categories, severity: severity.into() }
    }
}

/// Which strategy produced a [`ParsedOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMethod {
    JsonObject,
    NativeFormat,
}

impl fmt::Display for ParseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonObject => f.write_str("json"),
            Self::NativeFormat => f.write_str("native"),
        }
    }
}

/// JSON-object extraction first, then the `Categories: ... | Severity: ...` format.
pub fn default_parsers() -> Vec<Box<dyn OutputParser>> {
    vec![Box::new(JsonObjectParser::new()), Box::new(NativeFormatParser::new())]
}

/// Run `parsers` in order and return the first output that `accept` keeps.
///
/// `accept` lets callers reject a syntactically valid but unusable result so the
/// next strategy gets a chance; pass `Some` to take any match.
pub fn parse_output<T>(
    raw: &str,
    parsers: &[Box<dyn OutputParser>],
    mut accept: impl FnMut(ParsedOutput) -> Option<T>,
) -> Option<(T, ParseMethod)> {
    parsers.iter().find_map(|p| {
        let parsed = p.parse(raw)?;
        tracing::debug!(method = %p.method(), categories = ?parsed.categories, "parsed generator output");
        accept(parsed).map(|value| (value, p.method()))
    })
}

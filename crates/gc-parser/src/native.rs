//! The generator's training format: `Categories: X, Y | Severity: Level`.

use crate::{traits::OutputParser, ParseMethod, ParsedOutput};
use regex::Regex;
use std::sync::LazyLock;

static NATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Categories:\s*(.+?)\s*\|\s*Severity:\s*(\w+)").expect("valid native-format pattern")
});

pub struct NativeFormatParser;

impl NativeFormatParser {
    pub fn new() -> Self { Self }
}

impl OutputParser for NativeFormatParser {
    fn parse(&self, raw: &str) -> Option<ParsedOutput> {
        let caps = NATIVE_PATTERN.captures(raw)?;
        let categories = caps[1]
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        Some(ParsedOutput::new(categories, caps[2].trim()))
    }

    fn method(&self) -> ParseMethod {
        ParseMethod::NativeFormat
    }
}

impl Default for NativeFormatParser {
    fn default() -> Self { Self::new() }
}

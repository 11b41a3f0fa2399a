use crate::{ParseMethod, ParsedOutput};

/// A single extraction strategy over raw generator text.
pub trait OutputParser: Send + Sync {
    /// Extract a classification, or `None` when the text does not match.
    fn parse(&self, raw: &str) -> Option<ParsedOutput>;

    fn method(&self) -> ParseMethod;
}

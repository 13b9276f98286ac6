use regex::{NoExpand, Regex};

use super::CharFilter;
use crate::error::{Result, ScourError};

/// Square-bracket annotations such as `[spoiler]`, closed by the first `]`.
pub const BRACKETED_ANNOTATION_PATTERN: &str = r"\[[^\]]*\]";

/// A char filter that replaces text matching a regex pattern.
///
/// Matches are replaced left to right without overlap. The replacement is
/// inserted literally; `$` has no special meaning.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| ScourError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes `[...]` annotations.
    ///
    /// Each `[` is removed together with everything up to and including the
    /// next `]`. Brackets do not nest and an unclosed `[` is left alone.
    pub fn bracketed_annotations() -> Self {
        Self::new(BRACKETED_ANNOTATION_PATTERN, "")
            .expect("Bracketed annotation pattern should be valid")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, NoExpand(self.replacement.as_str()))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

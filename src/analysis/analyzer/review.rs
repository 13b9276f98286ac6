//! The review cleaning analyzer.
//!
//! Turns a raw (possibly HTML-formatted) review into lowercased stems:
//!
//! ```text
//! HTML strip → drop [...] annotations → Treebank tokenizer
//!     → char class → Porter stemmer → stop words
//! ```
//!
//! Stop words are compared against the stems, so a stop word whose stem
//! differs from itself (`was` → `wa`) survives.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::html_strip::HtmlStripCharFilter;
use crate::analysis::char_filter::pattern_replace::{
    BRACKETED_ANNOTATION_PATTERN, PatternReplaceCharFilter,
};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::char_class::{CharClass, CharClassFilter};
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::treebank::TreebankTokenizer;
use crate::error::Result;

/// The six-stage pipeline behind [`crate::Preprocessor`].
///
/// `char_class` decides whether digits survive the character filter.
pub struct ReviewAnalyzer {
    inner: PipelineAnalyzer,
    char_class: CharClass,
}

impl ReviewAnalyzer {
    /// Create a review analyzer keeping the characters of `char_class`.
    pub fn new(char_class: CharClass) -> Result<Self> {
        let tokenizer = Arc::new(TreebankTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(HtmlStripCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
                BRACKETED_ANNOTATION_PATTERN,
                "",
            )?))
            .add_filter(Arc::new(CharClassFilter::new(char_class)))
            .add_filter(Arc::new(StemFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("review");

        Ok(Self {
            inner: analyzer,
            char_class,
        })
    }

    /// Get the class of characters tokens may keep.
    pub fn char_class(&self) -> CharClass {
        self.char_class
    }

    /// Get the underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new(CharClass::default())
            .expect("Review analyzer should be creatable with default settings")
    }
}

impl Analyzer for ReviewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "review"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Debug for ReviewAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewAnalyzer")
            .field("inner", &self.inner)
            .field("char_class", &self.char_class)
            .finish()
    }
}

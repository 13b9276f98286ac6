//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it is passed to the
//! tokenizer.
//!
//! # Available Filters
//!
//! - [`html_strip::HtmlStripCharFilter`] - Extracts the text content of HTML
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use scour::analysis::char_filter::CharFilter;
//! use scour::analysis::char_filter::html_strip::HtmlStripCharFilter;
//!
//! let filter = HtmlStripCharFilter::new();
//! assert_eq!(filter.filter("<p>Hello <b>world</b></p>"), "Hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_strip;
pub mod pattern_replace;

pub use html_strip::HtmlStripCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;

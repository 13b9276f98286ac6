//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in scour. Analyzers turn raw text into a stream of normalized
//! tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom char filter, tokenizer and filter chains
//! - [`ReviewAnalyzer`](super::review::ReviewAnalyzer) - The review cleaning pipeline
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use scour::analysis::analyzer::analyzer::Analyzer;
//! use scour::analysis::token::TokenStream;
//! use scour::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so that one analyzer can serve a batch of
/// documents processed in parallel.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use scour::analysis::analyzer::analyzer::Analyzer;
    /// use scour::analysis::analyzer::review::ReviewAnalyzer;
    ///
    /// let analyzer = ReviewAnalyzer::default();
    /// let tokens: Vec<_> = analyzer.analyze("The acting was superb").unwrap().collect();
    ///
    /// assert_eq!(tokens[0].text, "act");
    /// ```
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}

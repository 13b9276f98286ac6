//! Text analysis module for Scour.
//!
//! This module provides the building blocks of the preprocessing pipeline:
//! char filters over the raw text, tokenizers, token filters, and analyzers
//! that chain them together.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, ReviewAnalyzer};
pub use char_filter::{CharFilter, HtmlStripCharFilter, PatternReplaceCharFilter};
pub use token::{Token, TokenStream};
pub use token_filter::{
    CharClass, CharClassFilter, Filter, PorterStemmer, StemFilter, Stemmer, StopFilter,
};
pub use tokenizer::{Tokenizer, TreebankTokenizer};

//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first token-producing step in the analysis pipeline,
//! responsible for splitting input text into meaningful units (tokens).
//!
//! # Available Tokenizers
//!
//! - [`treebank::TreebankTokenizer`] - Penn Treebank style word tokenization
//!
//! # Examples
//!
//! ```
//! use scour::analysis::tokenizer::Tokenizer;
//! use scour::analysis::tokenizer::treebank::TreebankTokenizer;
//!
//! let tokenizer = TreebankTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Don't stop.").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Do", "n't", "stop", "."]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod treebank;

pub use treebank::TreebankTokenizer;

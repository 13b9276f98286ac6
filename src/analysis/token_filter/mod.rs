//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream, modifying or removing tokens along the way.
//!
//! # Available Filters
//!
//! - [`char_class::CharClassFilter`] - Deletes characters outside an ASCII class
//! - [`stem::StemFilter`] - Reduces words to their stem form
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Char Class → Stemmer → Stop Words
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use scour::analysis::token::{Token, TokenStream};
/// use scour::analysis::token_filter::Filter;
/// use scour::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod char_class;
pub mod stem;
pub mod stop;

pub use char_class::{CharClass, CharClassFilter};
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;

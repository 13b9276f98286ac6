//! # Scour
//!
//! Text preprocessing for review classification.
//!
//! A raw review is turned into an ordered list of lowercased stems:
//!
//! - HTML markup is stripped
//! - bracketed annotations such as `[spoiler]` are removed
//! - text is split into words with Penn Treebank rules
//! - punctuation (and optionally digits) is dropped
//! - words are reduced with the Porter stemmer
//! - English and domain stop words are removed
//!
//! ```
//! let stems = scour::preprocess("<p>Great <b>movie</b>!</p>");
//! assert_eq!(stems, vec!["great"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod preprocess;

pub use error::{Result, ScourError};
pub use preprocess::{Preprocessor, PreprocessorConfig, preprocess, preprocess_with};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

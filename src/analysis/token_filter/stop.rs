//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! carry little information for downstream learning tasks. The default list is
//! the NLTK English stop word list extended with the movie-review domain stems
//! `movi`, `film` and `charact`.
//!
//! # Examples
//!
//! ```
//! use scour::analysis::token_filter::Filter;
//! use scour::analysis::token_filter::stop::StopFilter;
//! use scour::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("movi", 1),
//!     Token::new("great", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "great");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::char_class::CharClass;
use crate::error::Result;

/// The NLTK English stop word list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Stems that are noise in movie reviews ("movie", "film", "character").
pub const DOMAIN_STOP_WORDS: &[&str] = &["movi", "film", "charact"];

/// The default stop word set.
///
/// [`ENGLISH_STOP_WORDS`] plus [`DOMAIN_STOP_WORDS`], each passed through the
/// alphabetic character filter so that `don't` is stored as `dont`. Built on
/// first use and shared by every default [`StopFilter`].
pub static REVIEW_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    let words: HashSet<String> = ENGLISH_STOP_WORDS
        .iter()
        .chain(DOMAIN_STOP_WORDS)
        .map(|word| CharClass::Alphabetic.retain(word))
        .collect();
    log::trace!("built review stop word set with {} entries", words.len());
    Arc::new(words)
});

/// A filter that removes stop words from the token stream.
///
/// Matching is exact and case-sensitive. The filter can either remove stop
/// words entirely or mark them as stopped while keeping them in the stream.
///
/// # Examples
///
/// ## Custom Stop Words
///
/// ```
/// use scour::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["custom", "words", "list"]);
/// assert_eq!(filter.len(), 3);
/// ```
///
/// ## Preserve Stopped Tokens
///
/// ```
/// use scour::analysis::token_filter::Filter;
/// use scour::analysis::token_filter::stop::StopFilter;
/// use scour::analysis::token::Token;
///
/// let filter = StopFilter::from_words(vec!["the"]).remove_stopped(false);
/// let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter over [`REVIEW_STOP_WORDS_SET`].
    pub fn new() -> Self {
        Self::with_shared_stop_words(Arc::clone(&REVIEW_STOP_WORDS_SET))
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self::with_shared_stop_words(Arc::new(stop_words))
    }

    /// Create a new stop filter over an already shared stop word set.
    pub fn with_shared_stop_words(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter {
            stop_words,
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the shared stop word set.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        &self.stop_words
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None // Remove the token entirely
                    } else {
                        Some(token.stop()) // Mark as stopped but keep it
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_stop_filter_preserve_stopped() {
        let filter = StopFilter::from_words(vec!["the", "and"]).remove_stopped(false);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert!(!result[0].is_stopped());
        assert_eq!(result[1].text, "the");
        assert!(result[1].is_stopped());
        assert!(!result[2].is_stopped());
    }

    #[test]
    fn test_review_stop_words_are_filtered() {
        let filter = StopFilter::new();

        assert!(filter.is_stop_word("dont"));
        assert!(filter.is_stop_word("shouldve"));
        assert!(!filter.is_stop_word("don't"));
        assert!(filter.is_stop_word("movi"));
        assert!(filter.is_stop_word("film"));
        assert!(filter.is_stop_word("charact"));
    }

    #[test]
    fn test_review_stop_word_set_size() {
        // "it's" filters to "its", which is already in the list.
        assert_eq!(ENGLISH_STOP_WORDS.len(), 179);
        assert_eq!(REVIEW_STOP_WORDS_SET.len(), 181);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = StopFilter::new();

        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("The"));
    }

    #[test]
    fn test_default_filters_share_the_set() {
        let a = StopFilter::new();
        let b = StopFilter::default();

        assert!(Arc::ptr_eq(a.stop_words(), b.stop_words()));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}

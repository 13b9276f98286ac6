//! Character class filter implementation.
//!
//! Deletes every character of a token that is not an ASCII letter (or an
//! ASCII digit, when digits are kept) and not whitespace. Tokens left empty
//! are dropped from the stream in the same pass.
//!
//! # Examples
//!
//! ```
//! use scour::analysis::token::Token;
//! use scour::analysis::token_filter::Filter;
//! use scour::analysis::token_filter::char_class::{CharClass, CharClassFilter};
//!
//! let filter = CharClassFilter::new(CharClass::Alphabetic);
//! let tokens = vec![Token::new("n't", 0), Token::new("!", 1), Token::new("10", 2)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "nt");
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Check whether `c` separates words.
///
/// Unicode whitespace plus the information separators U+001C..=U+001F, which
/// Python's `\s` and `str.split()` also treat as whitespace.
#[inline]
pub fn is_separator_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// The set of characters a token may keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// ASCII letters and whitespace (`[a-zA-Z\s]`)
    #[default]
    Alphabetic,
    /// ASCII letters, ASCII digits and whitespace (`[a-zA-Z0-9\s]`)
    Alphanumeric,
}

impl CharClass {
    /// Pick the class matching a "remove digits" switch.
    pub fn from_remove_digits(remove_digits: bool) -> Self {
        if remove_digits {
            CharClass::Alphabetic
        } else {
            CharClass::Alphanumeric
        }
    }

    /// Check whether `c` belongs to this class.
    #[inline]
    pub fn keeps(self, c: char) -> bool {
        c.is_ascii_alphabetic()
            || is_separator_whitespace(c)
            || (self == CharClass::Alphanumeric && c.is_ascii_digit())
    }

    /// Delete every character of `text` outside this class.
    pub fn retain(self, text: &str) -> String {
        text.chars().filter(|&c| self.keeps(c)).collect()
    }
}

/// A filter that strips characters outside a [`CharClass`] from each token.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharClassFilter {
    class: CharClass,
}

impl CharClassFilter {
    /// Create a new char class filter.
    pub fn new(class: CharClass) -> Self {
        CharClassFilter { class }
    }

    /// Get the class of characters this filter keeps.
    pub fn class(&self) -> CharClass {
        self.class
    }
}

impl Filter for CharClassFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let class = self.class;
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    return Some(token);
                }
                let text = class.retain(&token.text);
                (!text.is_empty()).then(|| token.with_text(text))
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "char_class"
    }
}

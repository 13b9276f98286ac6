//! Review text preprocessing.
//!
//! [`Preprocessor`] runs the [`ReviewAnalyzer`] over a document and returns
//! the surviving stems as plain strings. The free functions [`preprocess`]
//! and [`preprocess_with`] use shared, lazily built preprocessors.
//!
//! # Examples
//!
//! ```
//! use scour::preprocess::{Preprocessor, PreprocessorConfig};
//!
//! let preprocessor = Preprocessor::new(PreprocessorConfig::default()).unwrap();
//! let stems = preprocessor.preprocess("<p>Great <b>movie</b>!</p>").unwrap();
//!
//! assert_eq!(stems, vec!["great"]);
//! ```

pub mod config;

use std::sync::LazyLock;

use rayon::prelude::*;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::review::ReviewAnalyzer;
use crate::error::Result;

pub use config::PreprocessorConfig;

static DIGITS_REMOVED: LazyLock<Preprocessor> =
    LazyLock::new(|| Preprocessor::from_config(PreprocessorConfig::new(true)));

static DIGITS_KEPT: LazyLock<Preprocessor> =
    LazyLock::new(|| Preprocessor::from_config(PreprocessorConfig::new(false)));

/// Preprocess `text`, removing digits.
///
/// ```
/// let stems = scour::preprocess("Good plot [spoiler: dies at end] but slow pacing");
/// assert_eq!(stems, vec!["good", "plot", "slow", "pace"]);
/// ```
pub fn preprocess(text: &str) -> Vec<String> {
    preprocess_with(text, true)
}

/// Preprocess `text`, removing digits when `remove_digits` is true.
///
/// ```
/// assert_eq!(scour::preprocess_with("Rated 10 out of 10", true), vec!["rate"]);
/// assert_eq!(scour::preprocess_with("Rated 10 out of 10", false), vec!["rate", "10", "10"]);
/// ```
pub fn preprocess_with(text: &str, remove_digits: bool) -> Vec<String> {
    let preprocessor = if remove_digits {
        &*DIGITS_REMOVED
    } else {
        &*DIGITS_KEPT
    };
    preprocessor.preprocess(text).unwrap_or_else(|e| {
        log::warn!("preprocessing failed: {e}");
        Vec::new()
    })
}

/// Cleans raw reviews into lowercased, stop-word free stems.
#[derive(Debug)]
pub struct Preprocessor {
    config: PreprocessorConfig,
    analyzer: ReviewAnalyzer,
}

impl Preprocessor {
    /// Create a preprocessor from a configuration.
    pub fn new(config: PreprocessorConfig) -> Result<Self> {
        let analyzer = ReviewAnalyzer::new(config.char_class())?;
        log::trace!("built preprocessor with {:?}", config);
        Ok(Self { config, analyzer })
    }

    /// Create a preprocessor whose stages use only built-in patterns.
    fn from_config(config: PreprocessorConfig) -> Self {
        Self::new(config).expect("Preprocessor should be creatable with built-in patterns")
    }

    /// Get the configuration of this preprocessor.
    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    /// Get the analyzer this preprocessor runs.
    pub fn analyzer(&self) -> &ReviewAnalyzer {
        &self.analyzer
    }

    /// Preprocess one document into its ordered stems.
    pub fn preprocess(&self, text: &str) -> Result<Vec<String>> {
        let stems: Vec<String> = self
            .analyzer
            .analyze(text)?
            .map(|token| token.text)
            .collect();
        log::trace!("preprocessed {} bytes into {} stems", text.len(), stems.len());
        Ok(stems)
    }

    /// Preprocess many documents in parallel.
    ///
    /// The result at index `i` belongs to `texts[i]`.
    pub fn preprocess_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("preprocessing a batch of {} documents", texts.len());
        texts
            .par_iter()
            .map(|text| self.preprocess(text.as_ref()))
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::from_config(PreprocessorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_strips_markup_and_stop_words() {
        let preprocessor = Preprocessor::default();

        assert_eq!(
            preprocessor
                .preprocess("<br /><br />This movie's characters were <i>wonderfully</i> written.")
                .unwrap(),
            vec!["thi", "wonder", "written"]
        );
    }

    #[test]
    fn test_preprocess_keeps_duplicates_in_order() {
        let preprocessor = Preprocessor::default();

        assert_eq!(
            preprocessor.preprocess("slow, slow and slower").unwrap(),
            vec!["slow", "slow", "slower"]
        );
    }

    #[test]
    fn test_preprocess_empty_input() {
        let preprocessor = Preprocessor::default();

        assert!(preprocessor.preprocess("").unwrap().is_empty());
        assert!(preprocessor.preprocess("<p></p>").unwrap().is_empty());
        assert!(preprocessor.preprocess("[all of it]").unwrap().is_empty());
    }

    #[test]
    fn test_preprocess_batch_matches_single() {
        let preprocessor = Preprocessor::new(PreprocessorConfig::new(false)).unwrap();
        let texts = vec![
            "Rated 10 out of 10",
            "",
            "The <b>acting</b> was superb",
            "Two thumbs up!",
        ];

        let batch = preprocessor.preprocess_batch(&texts).unwrap();

        assert_eq!(batch.len(), texts.len());
        for (text, stems) in texts.iter().zip(&batch) {
            assert_eq!(&preprocessor.preprocess(text).unwrap(), stems);
        }
    }

    #[test]
    fn test_free_functions_use_digit_switch() {
        assert_eq!(preprocess("Rated 10 out of 10"), vec!["rate"]);
        assert_eq!(preprocess_with("Rated 10 out of 10", false), vec!["rate", "10", "10"]);
    }

    #[test]
    fn test_config_is_kept() {
        let preprocessor = Preprocessor::new(PreprocessorConfig::new(false)).unwrap();

        assert!(!preprocessor.config().remove_digits);
        assert_eq!(
            preprocessor.analyzer().char_class(),
            crate::analysis::token_filter::char_class::CharClass::Alphanumeric
        );
    }
}

//! Porter stemming algorithm implementation.
//!
//! This module implements the Porter (1980) suffix-stripping algorithm with
//! the extensions popularized by NLTK:
//!
//! - a small table of irregular forms (`dying` → `die`, `skies` → `sky`, ...)
//! - words of at most two characters are only lowercased
//! - `-ies`/`-ied` on four-letter words become `-ie` (`ties` → `tie`)
//! - `y` → `i` only after a consonant that is not the first letter
//! - step 2 also rewrites `-bli`, `-fulli` and `-logi`, and reduces `-alli`
//!   before the other step 2 rules
//!
//! # Algorithm
//!
//! 1. Plurals and -ed/-ing suffixes, then terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! # Examples
//!
//! ```
//! use scour::analysis::token_filter::stem::Stemmer;
//! use scour::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("character"), "charact");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Irregular forms that bypass the rules.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

type Condition<'a> = &'a dyn Fn(&[char]) -> bool;

/// A suffix rule: `(suffix, replacement, condition on the remaining stem)`.
type Rule<'a> = (&'static str, &'static str, Option<Condition<'a>>);

/// Porter stemming algorithm implementation.
///
/// The stemmer is stateless; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Mark every position of `word` that holds a consonant.
    ///
    /// `y` is a consonant at the start of a word or after a vowel.
    fn consonant_mask(word: &[char]) -> Vec<bool> {
        let mut mask: Vec<bool> = Vec::with_capacity(word.len());
        for (i, &c) in word.iter().enumerate() {
            let consonant = match c {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' => i == 0 || !mask[i - 1],
                _ => true,
            };
            mask.push(consonant);
        }
        mask
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &[char]) -> usize {
        Self::consonant_mask(word)
            .windows(2)
            .filter(|pair| !pair[0] && pair[1])
            .count()
    }

    fn has_positive_measure(word: &[char]) -> bool {
        Self::measure(word) > 0
    }

    fn has_measure_above_one(word: &[char]) -> bool {
        Self::measure(word) > 1
    }

    fn contains_vowel(word: &[char]) -> bool {
        Self::consonant_mask(word).iter().any(|&consonant| !consonant)
    }

    fn ends_with(word: &[char], suffix: &str) -> bool {
        let n = suffix.len();
        word.len() >= n && word[word.len() - n..].iter().copied().eq(suffix.chars())
    }

    fn ends_with_consonant(word: &[char]) -> bool {
        Self::consonant_mask(word).last().copied().unwrap_or(false)
    }

    fn ends_double_consonant(word: &[char]) -> bool {
        let len = word.len();
        len >= 2 && word[len - 1] == word[len - 2] && Self::ends_with_consonant(word)
    }

    /// Check for a consonant-vowel-consonant ending whose last consonant is
    /// not w, x or y. A two-letter vowel-consonant word also qualifies.
    fn ends_cvc(word: &[char]) -> bool {
        let mask = Self::consonant_mask(word);
        match mask.as_slice() {
            [.., true, false, true] => !matches!(word[word.len() - 1], 'w' | 'x' | 'y'),
            [false, true] => true,
            _ => false,
        }
    }

    fn join(stem: &[char], suffix: &str) -> Vec<char> {
        let mut word = Vec::with_capacity(stem.len() + suffix.len());
        word.extend_from_slice(stem);
        word.extend(suffix.chars());
        word
    }

    /// Apply the first rule whose suffix matches.
    ///
    /// Once a suffix matches, no later rule is tried even when its condition
    /// fails.
    fn apply_rules(word: Vec<char>, rules: &[Rule<'_>]) -> Vec<char> {
        for &(suffix, replacement, condition) in rules {
            if Self::ends_with(&word, suffix) {
                let stem = &word[..word.len() - suffix.len()];
                if condition.is_none_or(|condition| condition(stem)) {
                    return Self::join(stem, replacement);
                }
                return word;
            }
        }
        word
    }

    /// Step 1a: plurals.
    fn step1a(word: Vec<char>) -> Vec<char> {
        if word.len() == 4 && Self::ends_with(&word, "ies") {
            return Self::join(&word[..1], "ie");
        }
        Self::apply_rules(
            word,
            &[
                ("sses", "ss", None),
                ("ies", "i", None),
                ("ss", "ss", None),
                ("s", "", None),
            ],
        )
    }

    /// Step 1b: -eed, -ed and -ing.
    fn step1b(word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "ied") {
            let stem = &word[..word.len() - 3];
            return Self::join(stem, if word.len() == 4 { "ie" } else { "i" });
        }

        if Self::ends_with(&word, "eed") {
            let stem = &word[..word.len() - 3];
            if Self::has_positive_measure(stem) {
                return Self::join(stem, "ee");
            }
            return word;
        }

        let stem = ["ed", "ing"].iter().find_map(|suffix| {
            if !Self::ends_with(&word, suffix) {
                return None;
            }
            let stem = &word[..word.len() - suffix.len()];
            Self::contains_vowel(stem).then(|| stem.to_vec())
        });
        let Some(stem) = stem else {
            return word;
        };

        if ["at", "bl", "iz"]
            .iter()
            .any(|suffix| Self::ends_with(&stem, suffix))
        {
            return Self::join(&stem, "e");
        }
        if Self::ends_double_consonant(&stem) {
            if matches!(stem[stem.len() - 1], 'l' | 's' | 'z') {
                return stem;
            }
            return stem[..stem.len() - 1].to_vec();
        }
        if Self::measure(&stem) == 1 && Self::ends_cvc(&stem) {
            return Self::join(&stem, "e");
        }
        stem
    }

    /// Step 1c: terminal y → i after a consonant.
    fn step1c(word: Vec<char>) -> Vec<char> {
        let after_consonant =
            |stem: &[char]| stem.len() > 1 && Self::ends_with_consonant(stem);
        Self::apply_rules(word, &[("y", "i", Some(&after_consonant))])
    }

    /// Step 2: double suffixes to single ones.
    fn step2(word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "alli") {
            let stem = &word[..word.len() - 4];
            if Self::has_positive_measure(stem) {
                return Self::step2(Self::join(stem, "al"));
            }
        }

        let positive: Condition<'_> = &Self::has_positive_measure;
        let logi_stem = word.len().saturating_sub(3);
        let logi = |_: &[char]| Self::has_positive_measure(&word[..logi_stem]);

        let rules: [Rule<'_>; 22] = [
            ("ational", "ate", Some(positive)),
            ("tional", "tion", Some(positive)),
            ("enci", "ence", Some(positive)),
            ("anci", "ance", Some(positive)),
            ("izer", "ize", Some(positive)),
            ("bli", "ble", Some(positive)),
            ("alli", "al", Some(positive)),
            ("entli", "ent", Some(positive)),
            ("eli", "e", Some(positive)),
            ("ousli", "ous", Some(positive)),
            ("ization", "ize", Some(positive)),
            ("ation", "ate", Some(positive)),
            ("ator", "ate", Some(positive)),
            ("alism", "al", Some(positive)),
            ("iveness", "ive", Some(positive)),
            ("fulness", "ful", Some(positive)),
            ("ousness", "ous", Some(positive)),
            ("aliti", "al", Some(positive)),
            ("iviti", "ive", Some(positive)),
            ("biliti", "ble", Some(positive)),
            ("fulli", "ful", Some(positive)),
            ("logi", "log", Some(&logi)),
        ];
        Self::apply_rules(word.clone(), &rules)
    }

    /// Step 3: -ic-, -full, -ness etc.
    fn step3(word: Vec<char>) -> Vec<char> {
        let positive: Condition<'_> = &Self::has_positive_measure;
        Self::apply_rules(
            word,
            &[
                ("icate", "ic", Some(positive)),
                ("ative", "", Some(positive)),
                ("alize", "al", Some(positive)),
                ("iciti", "ic", Some(positive)),
                ("ical", "ic", Some(positive)),
                ("ful", "", Some(positive)),
                ("ness", "", Some(positive)),
            ],
        )
    }

    /// Step 4: strip suffixes from words with measure above one.
    fn step4(word: Vec<char>) -> Vec<char> {
        let above_one: Condition<'_> = &Self::has_measure_above_one;
        let ion = |stem: &[char]| {
            Self::has_measure_above_one(stem) && matches!(stem.last(), Some('s' | 't'))
        };
        Self::apply_rules(
            word,
            &[
                ("al", "", Some(above_one)),
                ("ance", "", Some(above_one)),
                ("ence", "", Some(above_one)),
                ("er", "", Some(above_one)),
                ("ic", "", Some(above_one)),
                ("able", "", Some(above_one)),
                ("ible", "", Some(above_one)),
                ("ant", "", Some(above_one)),
                ("ement", "", Some(above_one)),
                ("ment", "", Some(above_one)),
                ("ent", "", Some(above_one)),
                ("ion", "", Some(&ion)),
                ("ou", "", Some(above_one)),
                ("ism", "", Some(above_one)),
                ("ate", "", Some(above_one)),
                ("iti", "", Some(above_one)),
                ("ous", "", Some(above_one)),
                ("ive", "", Some(above_one)),
                ("ize", "", Some(above_one)),
            ],
        )
    }

    /// Step 5a: remove a final -e.
    fn step5a(word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "e") {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                return stem.to_vec();
            }
        }
        word
    }

    /// Step 5b: -ll → -l on long words.
    fn step5b(word: Vec<char>) -> Vec<char> {
        if Self::ends_with(&word, "ll") && Self::has_measure_above_one(&word[..word.len() - 1]) {
            return word[..word.len() - 1].to_vec();
        }
        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if let Some(&(_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
            return stem.to_string();
        }

        let lower = word.to_lowercase();
        if word.chars().count() <= 2 {
            return lower;
        }

        let word: Vec<char> = lower.chars().collect();
        let word = Self::step1a(word);
        let word = Self::step1b(word);
        let word = Self::step1c(word);
        let word = Self::step2(word);
        let word = Self::step3(word);
        let word = Self::step4(word);
        let word = Self::step5a(word);
        let word = Self::step5b(word);
        word.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

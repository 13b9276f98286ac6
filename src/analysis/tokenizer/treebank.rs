//! Penn Treebank style word tokenizer.
//!
//! The tokenizer rewrites the text with an ordered list of regex
//! substitutions that surround every token boundary with spaces, then splits
//! on whitespace. The rules are those of the improved Treebank tokenizer
//! used by NLTK:
//!
//! 1. Opening quotes become ` `` ` and are split off.
//! 2. Punctuation is split off. A period is split only at the very end of
//!    the text; commas and colons are kept inside numbers (`3,000`, `10:30`).
//! 3. Brackets and double dashes are split off.
//! 4. Closing quotes become `''` and clitics are split (`'s`, `'ll`, `n't`, ...).
//! 5. Fused forms are split (`cannot` → `can not`, `gonna` → `gon na`, ...).
//!
//! Lookaround is expressed with capture groups because the `regex` crate
//! does not support it.

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token_filter::char_class::is_separator_whitespace;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A compiled substitution rule.
#[derive(Debug)]
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("Treebank rule pattern should be valid"),
            replacement,
        }
    }

    fn apply(&self, text: String) -> String {
        if self.pattern.is_match(&text) {
            self.pattern
                .replace_all(&text, self.replacement)
                .into_owned()
        } else {
            text
        }
    }
}

/// All rule groups, in the order they are applied.
#[derive(Debug)]
struct TreebankRules {
    starting_quotes: Vec<Rule>,
    punctuation: Vec<Rule>,
    brackets: Rule,
    double_dashes: Rule,
    ending_quotes: Vec<Rule>,
    contractions: Vec<Rule>,
}

static RULES: LazyLock<TreebankRules> = LazyLock::new(|| TreebankRules {
    starting_quotes: vec![
        Rule::new(r"([«“‘„]|[`]+)", " ${1} "),
        Rule::new(r#"^""#, "``"),
        Rule::new(r"(``)", " ${1} "),
        Rule::new(r#"([ (\[{<])("|'{2})"#, "${1} `` "),
        // A quote before a single word character, unless it starts a clitic.
        Rule::new(r"(')([\w&&[^mtsdnMTSDN]])\b", "${1} ${2}"),
    ],
    punctuation: vec![
        Rule::new(r#"([^.])(\.)([\])}>"']*)[\s\x1C-\x1F]*$"#, "${1} ${2} ${3} "),
        Rule::new(r"([:,])([^\d])", " ${1} ${2}"),
        Rule::new(r"([:,])$", " ${1} "),
        Rule::new(r"\.{2,}", " ${0} "),
        Rule::new(r"[;@#$%&]", " ${0} "),
        Rule::new(r#"([^.])(\.)([\])}>"']*)[\s\x1C-\x1F]*$"#, "${1} ${2}${3} "),
        Rule::new(r"[?!]", " ${0} "),
        Rule::new(r"([^'])' ", "${1} ' "),
        Rule::new(r"[*]", " ${0} "),
    ],
    brackets: Rule::new(r"[\]\[(){}<>]", " ${0} "),
    double_dashes: Rule::new(r"--", " -- "),
    ending_quotes: vec![
        Rule::new(r"([»”’])", " ${1} "),
        Rule::new(r"''", " '' "),
        Rule::new(r#"""#, " '' "),
        Rule::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        Rule::new(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ],
    contractions: vec![
        Rule::new(r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        Rule::new(r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        // Only before whitespace; the whitespace is written back.
        Rule::new(r"(?i)\b(wan)(na)([\s\x1C-\x1F])", " ${1} ${2} ${3}"),
        Rule::new(r"(?i) ('t)(is)\b", " ${1} ${2} "),
        Rule::new(r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ],
});

/// A rule-based English word tokenizer in the Penn Treebank tradition.
///
/// Contractions are split (`don't` → `do`, `n't`), punctuation becomes
/// separate tokens, and double quotes are normalized to ` `` ` and `''`.
#[derive(Clone, Debug, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    /// Create a new Treebank tokenizer.
    pub fn new() -> Self {
        TreebankTokenizer
    }

    /// Rewrite `text` so that every token is delimited by whitespace.
    fn rewrite(&self, text: &str) -> String {
        let rules = &*RULES;

        let mut text = text.to_string();
        for rule in &rules.starting_quotes {
            text = rule.apply(text);
        }
        for rule in &rules.punctuation {
            text = rule.apply(text);
        }
        text = rules.brackets.apply(text);
        text = rules.double_dashes.apply(text);

        // Clitic rules anchor on a trailing space.
        let mut text = format!(" {text} ");
        for rule in &rules.ending_quotes {
            text = rule.apply(text);
        }
        for rule in &rules.contractions {
            text = rule.apply(text);
        }
        text
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .rewrite(text)
            .split(is_separator_whitespace)
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        TreebankTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_treebank_tokenizer() {
        let text = "Good muffins cost $3.88\nin New York.  Please buy me\ntwo of them.\nThanks.";

        assert_eq!(
            words(text),
            vec![
                "Good", "muffins", "cost", "$", "3.88", "in", "New", "York.", "Please", "buy",
                "me", "two", "of", "them.", "Thanks", "."
            ]
        );
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokens: Vec<Token> = TreebankTokenizer::new()
            .tokenize("hello, world")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].text, ",");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(
            words("They'll save and invest more."),
            vec!["They", "'ll", "save", "and", "invest", "more", "."]
        );
        assert_eq!(
            words("hi, my name can't hello,"),
            vec!["hi", ",", "my", "name", "ca", "n't", "hello", ","]
        );
        assert_eq!(words("I don't know"), vec!["I", "do", "n't", "know"]);
        assert_eq!(words("it's John's"), vec!["it", "'s", "John", "'s"]);
    }

    #[test]
    fn test_fused_forms() {
        assert_eq!(words("I cannot go"), vec!["I", "can", "not", "go"]);
        assert_eq!(words("gonna wanna go"), vec!["gon", "na", "wan", "na", "go"]);
        assert_eq!(words("'Tis true"), vec!["'T", "is", "true"]);
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            words(r#""Hello," he said."#),
            vec!["``", "Hello", ",", "''", "he", "said", "."]
        );
        assert_eq!(words("'Hello' there"), vec!["'Hello", "'", "there"]);
    }

    #[test]
    fn test_numbers_keep_separators() {
        assert_eq!(words("3,000 at 10:30"), vec!["3,000", "at", "10:30"]);
        assert_eq!(words("a: b"), vec!["a", ":", "b"]);
    }

    #[test]
    fn test_brackets_and_dashes() {
        assert_eq!(
            words("(really) great--truly"),
            vec!["(", "really", ")", "great", "--", "truly"]
        );
    }

    #[test]
    fn test_punctuation_marks() {
        assert_eq!(
            words("Wow!! Really?... yes; no"),
            vec!["Wow", "!", "!", "Really", "?", "...", "yes", ";", "no"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(words("").is_empty());
        assert!(words("   \n\t ").is_empty());
    }

    #[test]
    fn test_information_separators_split_words() {
        assert_eq!(words("a\u{1f}b"), vec!["a", "b"]);
        assert_eq!(words("the end.\u{1c}"), vec!["the", "end", "."]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(TreebankTokenizer::new().name(), "treebank");
    }
}

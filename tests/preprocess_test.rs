//! Integration tests for review preprocessing.

use scour::analysis::token_filter::stop::REVIEW_STOP_WORDS_SET;
use scour::error::Result;
use scour::{Preprocessor, PreprocessorConfig, preprocess, preprocess_with};

const REVIEWS: &[&str] = &[
    "<p>Great <b>movie</b>!</p>",
    "One of the other reviewers has mentioned that after watching just 1 Oz episode you'll be hooked.",
    "Great plot.<br /><br />Terrible acting.",
    "I wouldn't recommend it -- the ending was terrible...",
    r#"A "masterpiece" (supposedly) of 2010s cinema: 9/10 stars, or maybe 8.5?"#,
    "Good plot [spoiler: dies at end] but slow pacing",
    "Tom &amp; Jerry&#39;s",
    "<script>var film = 1;</script>The film's characters make this movie a classic",
];

#[test]
fn test_html_is_stripped() -> Result<()> {
    let stems = preprocess("<p>Great <b>movie</b>!</p>");

    assert_eq!(stems, vec!["great"]);
    assert!(stems.iter().all(|s| !s.contains('<') && !s.contains('>')));

    let stems = preprocess(r#"<a href="http://example.com" title="spam">link</a> works"#);
    assert_eq!(stems, vec!["link", "work"]);

    Ok(())
}

#[test]
fn test_entities_are_decoded() -> Result<()> {
    assert_eq!(preprocess("Tom &amp; Jerry&#39;s"), vec!["tom", "jerri"]);

    Ok(())
}

#[test]
fn test_line_breaks_do_not_separate_words() -> Result<()> {
    // <br /> contributes no text, so the sentences run together.
    assert_eq!(
        preprocess("Great plot.<br /><br />Terrible acting."),
        vec!["great", "plotterr", "act"]
    );

    Ok(())
}

#[test]
fn test_markup_inside_raw_text_elements_is_stripped() -> Result<()> {
    assert_eq!(preprocess("<textarea><b>great</b></textarea>"), vec!["great"]);
    assert_eq!(
        preprocess("<title><strong>superb</strong></title>"),
        vec!["superb"]
    );
    assert_eq!(
        preprocess("<noscript><em>awesome</em></noscript>"),
        vec!["awesom"]
    );
    assert_eq!(preprocess("<![CDATA[great]]>"), vec!["great"]);

    Ok(())
}

#[test]
fn test_information_separators_split_words() -> Result<()> {
    assert_eq!(preprocess("great\u{1f}acting"), vec!["great", "act"]);

    Ok(())
}

#[test]
fn test_long_token_on_small_stack() -> Result<()> {
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| preprocess(&"y".repeat(30_000)))?;
    let stems = handle.join().expect("preprocess thread panicked");

    assert_eq!(stems.len(), 1);
    assert!(stems[0].chars().all(|c| c == 'y' || c == 'i'));

    Ok(())
}

#[test]
fn test_bracketed_annotations_are_removed() -> Result<()> {
    let stems = preprocess("Good plot [spoiler: dies at end] but slow pacing");

    assert_eq!(stems, vec!["good", "plot", "slow", "pace"]);
    for removed in ["spoiler", "die", "dies", "end"] {
        assert!(!stems.iter().any(|s| s == removed));
    }

    Ok(())
}

#[test]
fn test_digit_toggle() -> Result<()> {
    assert_eq!(preprocess("Rated 10 out of 10"), vec!["rate"]);
    assert_eq!(
        preprocess_with("Rated 10 out of 10", false),
        vec!["rate", "10", "10"]
    );
    assert_eq!(
        preprocess_with(REVIEWS[4], false),
        vec!["masterpiec", "supposedli", "2010", "cinema", "910", "star", "mayb", "85"]
    );

    Ok(())
}

#[test]
fn test_domain_stop_words_are_removed() -> Result<()> {
    let stems = preprocess(REVIEWS[7]);

    assert_eq!(stems, vec!["make", "thi", "classic"]);
    for noise in ["movi", "film", "charact"] {
        assert!(!stems.iter().any(|s| s == noise));
    }

    Ok(())
}

#[test]
fn test_contractions() -> Result<()> {
    assert_eq!(
        preprocess(REVIEWS[3]),
        vec!["would", "nt", "recommend", "end", "wa", "terribl"]
    );
    assert_eq!(
        preprocess("Don't waste your time; it's awful"),
        vec!["nt", "wast", "time", "aw"]
    );

    Ok(())
}

#[test]
fn test_full_review() -> Result<()> {
    assert_eq!(
        preprocess(REVIEWS[1]),
        vec!["one", "review", "ha", "mention", "watch", "oz", "episod", "hook"]
    );

    Ok(())
}

#[test]
fn test_empty_and_punctuation_only_input() -> Result<()> {
    assert!(preprocess("").is_empty());
    assert!(preprocess("   ").is_empty());
    assert!(preprocess("!!! ... ---").is_empty());
    assert!(preprocess("<div><br/></div>").is_empty());

    Ok(())
}

#[test]
fn test_order_and_duplicates_are_preserved() -> Result<()> {
    assert_eq!(preprocess("zebra apple mango"), vec!["zebra", "appl", "mango"]);
    assert_eq!(
        preprocess("Hated it. Hated it! HATED IT!!!"),
        vec!["hate", "hate", "hate"]
    );

    Ok(())
}

#[test]
fn test_output_invariants() -> Result<()> {
    for review in REVIEWS {
        for stem in preprocess(review) {
            assert!(!stem.is_empty());
            assert!(stem.chars().all(|c| c.is_ascii_lowercase()), "{stem:?}");
            assert!(!REVIEW_STOP_WORDS_SET.contains(&stem), "{stem:?}");
        }
        for stem in preprocess_with(review, false) {
            assert!(!stem.is_empty());
            assert!(
                stem.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "{stem:?}"
            );
        }
    }

    Ok(())
}

#[test]
fn test_batch_matches_single_documents() -> Result<()> {
    let preprocessor = Preprocessor::new(PreprocessorConfig::default())?;

    let batch = preprocessor.preprocess_batch(REVIEWS)?;

    assert_eq!(batch.len(), REVIEWS.len());
    for (review, stems) in REVIEWS.iter().zip(&batch) {
        assert_eq!(&preprocess(review), stems);
    }

    Ok(())
}

#[test]
fn test_concurrent_callers_agree() -> Result<()> {
    let expected: Vec<Vec<String>> = REVIEWS.iter().map(|r| preprocess(r)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| REVIEWS.iter().map(|r| preprocess(r)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    Ok(())
}

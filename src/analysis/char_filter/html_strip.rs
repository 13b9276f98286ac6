//! HTML strip char filter implementation.
//!
//! Parses the input as an HTML fragment and keeps only its text nodes, in
//! document order. Tags, attributes and comments disappear and character
//! references are decoded. The html5ever parser behind `scraper` recovers from
//! any malformed input, so this filter never fails; text without markup comes
//! back unchanged.
//!
//! html5ever reads the content of elements such as `textarea`, `title` and
//! `noscript` as raw text, so markup inside them would survive as literal
//! tags. That text is parsed again as a fragment of its own. CDATA sections,
//! which html5ever turns into comments, keep their content.

use scraper::{Html, Node};

use super::CharFilter;

/// Elements whose text content is not part of the readable text.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Elements whose content html5ever keeps as unparsed text.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "textarea",
    "title",
    "noscript",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
];

/// Nesting limit for parsing raw text content again; deeper content is dropped.
const MAX_REPARSE_DEPTH: usize = 8;

const CDATA_PREFIX: &str = "[CDATA[";

/// A char filter that replaces HTML markup with its textual content.
#[derive(Clone, Debug, Default)]
pub struct HtmlStripCharFilter;

impl HtmlStripCharFilter {
    /// Create a new HTML strip char filter.
    pub fn new() -> Self {
        HtmlStripCharFilter
    }

    fn element_in(node: &Node, names: &[&str]) -> bool {
        node.as_element()
            .is_some_and(|element| names.contains(&element.name()))
    }

    /// Append the readable text of `input` to `output`.
    fn extract_text(input: &str, depth: usize, output: &mut String) {
        if !input.contains(['<', '&']) {
            output.push_str(input);
            return;
        }

        let fragment = Html::parse_fragment(input);

        for node in fragment.tree.root().descendants() {
            let text = match node.value() {
                Node::Text(text) => &**text,
                Node::Comment(comment) => match comment.strip_prefix(CDATA_PREFIX) {
                    Some(cdata) => cdata.strip_suffix("]]").unwrap_or(cdata),
                    None => continue,
                },
                _ => continue,
            };

            if node
                .ancestors()
                .any(|ancestor| Self::element_in(ancestor.value(), HIDDEN_ELEMENTS))
            {
                continue;
            }

            let raw = node
                .parent()
                .is_some_and(|parent| Self::element_in(parent.value(), RAW_TEXT_ELEMENTS));
            if !raw {
                output.push_str(text);
            } else if depth < MAX_REPARSE_DEPTH {
                Self::extract_text(text, depth + 1, output);
            } else {
                log::debug!("html_strip: dropping raw text nested {depth} levels deep");
            }
        }
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        Self::extract_text(input, 0, &mut output);

        log::trace!(
            "html_strip: {} bytes of markup -> {} bytes of text",
            input.len(),
            output.len()
        );

        output
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}

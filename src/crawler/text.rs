//! Visible text extraction
//!
//! Collects every text node of a document except those inside elements that
//! never render as text, then collapses whitespace into single spaces.

use scraper::{Html, Node};

/// Elements whose content is never visible text
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Returns the normalized visible text of an HTML document
///
/// Text inside `script`, `style` and `noscript` is dropped together with
/// all of its descendants. Remaining text nodes are joined with a single
/// space, every run of whitespace becomes one ASCII space and the result has
/// no leading or trailing whitespace. Comments are not text.
///
/// # Example
///
/// ```
/// use web_spider::crawler::extract_text;
///
/// let html = "<p>Hello\n  <b>world</b></p><script>var x = 1;</script>";
/// assert_eq!(extract_text(html), "Hello world");
/// ```
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    extract_text_from_document(&document)
}

/// Extracts visible text from an already parsed document
pub fn extract_text_from_document(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        if node.ancestors().any(|ancestor| is_hidden(ancestor.value())) {
            continue;
        }

        for word in fragment.split_whitespace() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(word);
        }
    }

    text
}

fn is_hidden(node: &Node) -> bool {
    match node {
        Node::Element(element) => HIDDEN_ELEMENTS.contains(&element.name()),
        _ => false,
    }
}

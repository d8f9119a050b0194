//! Text-node rewriting over an owned parsed HTML tree.
//!
//! The walk mutates character data only: element structure, attributes, and
//! comments all survive untouched, and text inside the non-prose skip set
//! (`style`, `script`, `code`, `pre`, `textarea`, `noscript`) is preserved
//! verbatim even when it visually contains target-script characters.

use scraper::{Html, Node};

/// Elements whose descendant text is never converted.
const SKIP_TAGS: [&str; 6] = ["style", "script", "code", "pre", "textarea", "noscript"];

/// Feed content is fragment-shaped; only inputs carrying a document
/// envelope are parsed (and re-serialized) as full documents so the
/// envelope survives the round trip.
fn is_document_shaped(html: &str) -> bool {
    let head = html.chars().take(512).collect::<String>().to_lowercase();
    head.contains("<!doctype") || head.contains("<html")
}

/// Parses `html`, replaces every convertible text node with `convert`
/// applied to its raw (untrimmed) content, and serializes the tree back.
///
/// Each descendant text node is visited exactly once. Whitespace-only text
/// nodes and text under a [`SKIP_TAGS`] ancestor are left alone.
pub(crate) fn rewrite_text_nodes<F>(html: &str, mut convert: F) -> String
where
    F: FnMut(&str) -> String,
{
    let document_shaped = is_document_shaped(html);
    let mut doc = if document_shaped { Html::parse_document(html) } else { Html::parse_fragment(html) };

    let replacements: Vec<_> = doc
        .tree
        .nodes()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            if text.trim().is_empty() {
                return None;
            }

            let skipped = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(el) => SKIP_TAGS.contains(&el.name()),
                _ => false,
            });
            if skipped {
                return None;
            }

            let converted = convert(&**text);
            if converted.as_str() == &**text {
                return None;
            }
            Some((node.id(), converted))
        })
        .collect();

    for (id, converted) in replacements {
        if let Some(mut node) = doc.tree.get_mut(id)
            && let Node::Text(text) = node.value()
        {
            text.text = converted.as_str().into();
        }
    }

    if document_shaped { doc.html() } else { doc.root_element().inner_html() }
}

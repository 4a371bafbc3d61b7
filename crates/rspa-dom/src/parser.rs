// File: src/parser.rs
// Purpose: HTML fragment and page parsing into detached nodes

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::{ElementRef, Html, Node as HtmlNode};

use crate::node::{Element, Node};

/// Elements that never have children or a closing tag.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose content is serialized verbatim.
pub(crate) const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// `<name ...attributes/>`; quoted attribute values may contain `>` and `/`.
static SELF_CLOSING_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<([A-Za-z][A-Za-z0-9_.:-]*)((?:\s+[^\s"'<>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'<>/]+))?)*)\s*/>"#,
    )
    .unwrap()
});

/// Parses `markup` into top-level nodes.
///
/// Runs the HTML parsing algorithm in a `<body>` context, so character
/// references are decoded, names are lower-cased and misnested markup is
/// repaired the way a browser repairs it. On top of that, `/>` closes any
/// element, not only void ones. Parsing never fails.
pub fn parse_fragment(markup: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(&expand_self_closing(markup));
    convert_children(fragment.root_element())
}

/// Parses a complete HTML page and returns the children of its `<body>`.
pub fn parse_body(page: &str) -> Vec<Node> {
    let document = Html::parse_document(&expand_self_closing(page));
    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
        .map(convert_children)
        .unwrap_or_default()
}

/// Rewrites `<x/>` to `<x></x>` for every non-void element.
fn expand_self_closing(markup: &str) -> Cow<'_, str> {
    SELF_CLOSING_TAG.replace_all(markup, |caps: &Captures| {
        let name = &caps[1];
        if VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()) {
            caps[0].to_string()
        } else {
            format!("<{name}{}></{name}>", &caps[2])
        }
    })
}

fn convert_children(parent: ElementRef<'_>) -> Vec<Node> {
    parent
        .children()
        .filter_map(|child| match child.value() {
            HtmlNode::Text(text) => Some(Node::new_text(&**text)),
            HtmlNode::Comment(comment) => Some(Node::new_comment(&**comment)),
            HtmlNode::Element(_) => {
                ElementRef::wrap(child).map(|element| convert_element(element).into_node())
            }
            _ => None,
        })
        .collect()
}

fn convert_element(source: ElementRef<'_>) -> Element {
    let value = source.value();
    let attributes = value
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    let element = Element::with_attributes(value.name(), attributes);
    for child in convert_children(source) {
        // Freshly created nodes always fit under a new element.
        let _ = element.append_child(&child);
    }
    element
}

// File: src/serialize.rs
// Purpose: Markup serialization (inverse of the fragment parser)

use crate::node::{Node, NodeKind};
use crate::parser::{RAW_TEXT_ELEMENTS, VOID_ELEMENTS};

pub(crate) fn outer_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, false, &mut out);
    out
}

pub(crate) fn inner_html(node: &Node) -> String {
    let raw = node
        .as_element()
        .is_some_and(|element| RAW_TEXT_ELEMENTS.contains(&element.tag_name()));
    let mut out = String::new();
    for child in node.children() {
        write_node(&child, raw, &mut out);
    }
    out
}

fn write_node(node: &Node, raw_text: bool, out: &mut String) {
    match node.kind() {
        NodeKind::Document => {
            for child in node.children() {
                write_node(&child, false, out);
            }
        }
        NodeKind::Text => {
            let text = node.text_data().unwrap_or_default();
            if raw_text {
                out.push_str(&text);
            } else {
                escape_text(&text, out);
            }
        }
        NodeKind::Comment => {
            out.push_str("<!--");
            out.push_str(node.comment_data().unwrap_or_default());
            out.push_str("-->");
        }
        NodeKind::Element => {
            let Some(element) = node.as_element() else {
                return;
            };
            let tag = element.tag_name();
            out.push('<');
            out.push_str(tag);
            for (name, value) in element.attributes() {
                out.push(' ');
                out.push_str(&name);
                out.push_str("=\"");
                escape_attribute(&value, out);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag) {
                return;
            }
            out.push_str(&inner_html(node));
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_fragment;
    use pretty_assertions::assert_eq;

    fn round_trip(markup: &str) -> String {
        parse_fragment(markup)
            .iter()
            .map(super::outer_html)
            .collect()
    }

    #[test]
    fn test_normalised_markup_round_trips() {
        let markup = r#"<section class="home"><h1 id="t">Title</h1><input type="text"><!-- c --><p>a &amp; b</p></section>"#;
        assert_eq!(round_trip(markup), markup);
    }

    #[test]
    fn test_self_closed_element_gets_end_tag() {
        assert_eq!(round_trip("<div/>"), "<div></div>");
    }

    #[test]
    fn test_attribute_quotes_are_escaped() {
        assert_eq!(
            round_trip(r#"<p title='say "hi"'></p>"#),
            r#"<p title="say &quot;hi&quot;"></p>"#
        );
    }

    #[test]
    fn test_script_content_is_not_escaped() {
        let markup = "<script>if (a < b) { go(); }</script>";
        assert_eq!(round_trip(markup), markup);
    }
}

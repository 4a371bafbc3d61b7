// File: src/document.rs
// Purpose: Document node with the html/head/body skeleton and lookups

use std::ops::Deref;

use crate::error::DomError;
use crate::node::{DocumentData, Element, Node, NodeData, NodeKind};
use crate::parser::parse_fragment;
use crate::selector::SelectorList;

/// Root of a page. Derefs to [`Node`] so document-level listeners use the
/// ordinary listener API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(Node);

impl Document {
    /// Creates `<html><head><title></title></head><body></body></html>`.
    pub fn new() -> Self {
        let node = Node::from_data(NodeData::Document(DocumentData::default()));
        let html = Element::new("html");
        let head = Element::new("head");
        let body = Element::new("body");
        let skeleton = [
            (node.clone(), html.as_node().clone()),
            (html.as_node().clone(), head.as_node().clone()),
            (head.as_node().clone(), Element::new("title").into()),
            (html.as_node().clone(), body.as_node().clone()),
        ];
        for (parent, child) in skeleton {
            // Fresh detached nodes: insertion cannot fail.
            let _ = parent.append_child(&child);
        }
        Document(node)
    }

    /// Creates a document whose body holds the parsed `markup`.
    pub fn with_body(markup: &str) -> Result<Self, DomError> {
        let document = Self::new();
        if let Some(body) = document.body() {
            body.replace_children(parse_fragment(markup))?;
        }
        Ok(document)
    }

    pub(crate) fn from_node(node: Node) -> Option<Self> {
        (node.kind() == NodeKind::Document).then_some(Document(node))
    }

    pub fn as_node(&self) -> &Node {
        &self.0
    }

    pub fn document_element(&self) -> Option<Element> {
        self.0
            .child_elements()
            .into_iter()
            .find(|element| element.tag_name() == "html")
    }

    pub fn head(&self) -> Option<Element> {
        self.section("head")
    }

    pub fn body(&self) -> Option<Element> {
        self.section("body")
    }

    fn section(&self, tag: &str) -> Option<Element> {
        self.document_element()?
            .child_elements()
            .into_iter()
            .find(|element| element.tag_name() == tag)
    }

    pub fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }

    pub fn create_text_node(&self, text: &str) -> Node {
        Node::new_text(text)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.0
            .descendants()
            .filter_map(|node| node.as_element())
            .find(|element| element.id().as_deref() == Some(id))
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, DomError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self
            .0
            .descendants()
            .filter_map(|node| node.as_element())
            .find(|element| selector.matches(element)))
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self
            .0
            .descendants()
            .filter_map(|node| node.as_element())
            .filter(|element| selector.matches(element))
            .collect())
    }

    /// Text of the head `<title>`, whitespace collapsed.
    pub fn title(&self) -> String {
        self.head()
            .and_then(|head| {
                head.child_elements()
                    .into_iter()
                    .find(|element| element.tag_name() == "title")
            })
            .map(|title| {
                title
                    .text_content()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    pub fn set_title(&self, title: &str) -> Result<(), DomError> {
        let head = match self.head() {
            Some(head) => head,
            None => {
                let html = self.document_element().ok_or_else(|| {
                    DomError::Hierarchy("document has no html element".to_string())
                })?;
                let head = Element::new("head");
                html.insert_before(&head, html.first_child().as_ref())?;
                head
            }
        };
        let existing = head
            .child_elements()
            .into_iter()
            .find(|element| element.tag_name() == "title");
        let element = match existing {
            Some(element) => element,
            None => {
                let element = Element::new("title");
                head.append_child(&element)?;
                element
            }
        };
        element.set_text_content(title);
        Ok(())
    }

    /// Full page navigations triggered by unprevented link clicks, oldest first.
    pub fn hard_navigations(&self) -> Vec<String> {
        self.data().hard_navigations.borrow().clone()
    }

    pub(crate) fn record_hard_navigation(&self, href: String) {
        self.data().hard_navigations.borrow_mut().push(href);
    }

    fn data(&self) -> &DocumentData {
        match self.0.document_data() {
            Some(data) => data,
            None => unreachable!("Document always wraps document data"),
        }
    }

    /// Serialized `<html>` element.
    pub fn to_html(&self) -> String {
        self.document_element()
            .map(|html| html.outer_html())
            .unwrap_or_default()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Document {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_skeleton() {
        let document = Document::new();
        assert_eq!(
            document.to_html(),
            "<html><head><title></title></head><body></body></html>"
        );
    }

    #[test]
    fn test_get_element_by_id() {
        let document = Document::with_body(r#"<div id="app"><p id="x">hi</p></div>"#).unwrap();
        let p = document.get_element_by_id("x").unwrap();
        assert_eq!(p.text_content(), "hi");
        assert!(document.get_element_by_id("missing").is_none());
    }

    #[test]
    fn test_title_round_trip() {
        let document = Document::new();
        document.set_title("Home").unwrap();
        assert_eq!(document.title(), "Home");
    }

    #[test]
    fn test_owner_document_of_attached_node() {
        let document = Document::with_body("<main><a href=\"/x\">x</a></main>").unwrap();
        let anchor = document.query_selector("a").unwrap().unwrap();
        assert_eq!(anchor.owner_document(), Some(document.clone()));
        assert_eq!(Element::new("div").owner_document(), None);
    }
}

// File: src/node.rs
// Purpose: Shared node handles, tree mutation and element state

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use crate::document::Document;
use crate::error::DomError;
use crate::event::EventListener;
use crate::parser::parse_fragment;
use crate::selector::SelectorList;
use crate::serialize;

pub(crate) struct NodeInner {
    parent: RefCell<Weak<NodeInner>>,
    children: RefCell<Vec<Node>>,
    pub(crate) listeners: RefCell<Vec<EventListener>>,
    pub(crate) data: NodeData,
}

pub(crate) enum NodeData {
    Document(DocumentData),
    Element(ElementData),
    Text(RefCell<String>),
    Comment(String),
}

#[derive(Default)]
pub(crate) struct DocumentData {
    pub(crate) hard_navigations: RefCell<Vec<String>>,
}

pub(crate) struct ElementData {
    tag: String,
    attributes: RefCell<Vec<(String, String)>>,
    value: RefCell<Option<String>>,
}

/// Kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
}

/// Shared handle to a node in a document tree.
///
/// Cloning is cheap and yields another handle to the same node; equality is
/// identity. Parents are held weakly, so a subtree lives as long as something
/// holds its root.
#[derive(Clone)]
pub struct Node(pub(crate) Rc<NodeInner>);

impl Node {
    pub(crate) fn from_data(data: NodeData) -> Self {
        Node(Rc::new(NodeInner {
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            data,
        }))
    }

    /// Creates a detached text node.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::from_data(NodeData::Text(RefCell::new(text.into())))
    }

    /// Creates a detached comment node.
    pub fn new_comment(text: impl Into<String>) -> Self {
        Self::from_data(NodeData::Comment(text.into()))
    }

    pub fn kind(&self) -> NodeKind {
        match &self.0.data {
            NodeData::Document(_) => NodeKind::Document,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
        }
    }

    /// Returns this node as an [`Element`] if it is one.
    pub fn as_element(&self) -> Option<Element> {
        match self.kind() {
            NodeKind::Element => Some(Element(self.clone())),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<Node> {
        self.0.parent.borrow().upgrade().map(Node)
    }

    pub fn parent_element(&self) -> Option<Element> {
        self.parent().and_then(|parent| parent.as_element())
    }

    /// Snapshot of the direct children.
    pub fn children(&self) -> Vec<Node> {
        self.0.children.borrow().clone()
    }

    pub fn child_elements(&self) -> Vec<Element> {
        self.0
            .children
            .borrow()
            .iter()
            .filter_map(Node::as_element)
            .collect()
    }

    pub fn first_child(&self) -> Option<Node> {
        self.0.children.borrow().first().cloned()
    }

    pub fn has_children(&self) -> bool {
        !self.0.children.borrow().is_empty()
    }

    /// Pre-order iterator over all descendants, excluding `self`.
    pub fn descendants(&self) -> Descendants {
        let mut stack = self.children();
        stack.reverse();
        Descendants { stack }
    }

    /// Iterator over the parent chain, nearest first.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors { next: self.parent() }
    }

    /// True if `other` is this node or one of its descendants.
    pub fn contains(&self, other: &Node) -> bool {
        other == self || other.ancestors().any(|ancestor| &ancestor == self)
    }

    /// The document this node is attached to, if any.
    pub fn owner_document(&self) -> Option<Document> {
        let root = self.ancestors().last().unwrap_or_else(|| self.clone());
        Document::from_node(root)
    }

    fn can_have_children(&self) -> bool {
        matches!(self.kind(), NodeKind::Document | NodeKind::Element)
    }

    fn ensure_insertable(&self, child: &Node) -> Result<(), DomError> {
        if !self.can_have_children() {
            return Err(DomError::Hierarchy(format!(
                "{:?} nodes cannot have children",
                self.kind()
            )));
        }
        if child.kind() == NodeKind::Document {
            return Err(DomError::Hierarchy(
                "a document cannot be inserted into a tree".to_string(),
            ));
        }
        if child.contains(self) {
            return Err(DomError::Hierarchy(
                "the new child contains the parent".to_string(),
            ));
        }
        Ok(())
    }

    /// Appends `child`, moving it out of its current parent first.
    pub fn append_child(&self, child: &Node) -> Result<(), DomError> {
        self.ensure_insertable(child)?;
        child.remove();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
        Ok(())
    }

    /// Inserts `child` before `reference`, or appends when `reference` is `None`.
    pub fn insert_before(&self, child: &Node, reference: Option<&Node>) -> Result<(), DomError> {
        let Some(reference) = reference else {
            return self.append_child(child);
        };
        if child == reference {
            return Ok(());
        }
        self.ensure_insertable(child)?;
        if reference.parent().as_ref() != Some(self) {
            return Err(DomError::Hierarchy(
                "the reference node is not a child of this node".to_string(),
            ));
        }

        child.remove();
        let mut children = self.0.children.borrow_mut();
        let index = children
            .iter()
            .position(|candidate| candidate == reference)
            .unwrap_or(children.len());
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        children.insert(index, child.clone());
        Ok(())
    }

    pub fn remove_child(&self, child: &Node) -> Result<Node, DomError> {
        if child.parent().as_ref() != Some(self) {
            return Err(DomError::Hierarchy(
                "the node to remove is not a child of this node".to_string(),
            ));
        }
        child.remove();
        Ok(child.clone())
    }

    /// Detaches this node from its parent. No-op for detached nodes.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .0
            .children
            .borrow_mut()
            .retain(|candidate| candidate != self);
        *self.0.parent.borrow_mut() = Weak::new();
    }

    /// Puts `replacement` where this node currently is.
    pub fn replace_with(&self, replacement: &Node) -> Result<(), DomError> {
        if replacement == self {
            return Ok(());
        }
        let parent = self.parent().ok_or(DomError::NoParent)?;
        parent.insert_before(replacement, Some(self))?;
        self.remove();
        Ok(())
    }

    /// Drops all current children and appends `nodes` in order.
    pub fn replace_children<I>(&self, nodes: I) -> Result<(), DomError>
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        for node in &nodes {
            self.ensure_insertable(node)?;
        }
        for child in self.children() {
            child.remove();
        }
        for node in &nodes {
            self.append_child(node)?;
        }
        Ok(())
    }

    /// Concatenated text of this node and its descendants. Comments are skipped.
    pub fn text_content(&self) -> String {
        match &self.0.data {
            NodeData::Text(text) => text.borrow().clone(),
            NodeData::Comment(_) => String::new(),
            NodeData::Document(_) | NodeData::Element(_) => self
                .descendants()
                .filter_map(|node| match &node.0.data {
                    NodeData::Text(text) => Some(text.borrow().clone()),
                    _ => None,
                })
                .collect(),
        }
    }

    /// Replaces the content with a single text node (or nothing, for `""`).
    pub fn set_text_content(&self, text: &str) {
        match &self.0.data {
            NodeData::Text(current) => *current.borrow_mut() = text.to_string(),
            NodeData::Comment(_) => {}
            NodeData::Document(_) | NodeData::Element(_) => {
                for child in self.children() {
                    child.remove();
                }
                if !text.is_empty() {
                    let child = Node::new_text(text);
                    *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
                    self.0.children.borrow_mut().push(child);
                }
            }
        }
    }

    /// Markup of this node: the element with its subtree, escaped text or a
    /// comment.
    pub fn outer_html(&self) -> String {
        serialize::outer_html(self)
    }

    pub(crate) fn text_data(&self) -> Option<String> {
        match &self.0.data {
            NodeData::Text(text) => Some(text.borrow().clone()),
            _ => None,
        }
    }

    pub(crate) fn comment_data(&self) -> Option<&str> {
        match &self.0.data {
            NodeData::Comment(text) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn document_data(&self) -> Option<&DocumentData> {
        match &self.0.data {
            NodeData::Document(data) => Some(data),
            _ => None,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.data {
            NodeData::Document(_) => write!(f, "#document"),
            NodeData::Element(data) => write!(f, "<{}>", data.tag),
            NodeData::Text(text) => write!(f, "#text {:?}", text.borrow()),
            NodeData::Comment(text) => write!(f, "<!--{text}-->"),
        }
    }
}

pub struct Descendants {
    stack: Vec<Node>,
}

impl Iterator for Descendants {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let node = self.stack.pop()?;
        let mut children = node.children();
        children.reverse();
        self.stack.extend(children);
        Some(node)
    }
}

pub struct Ancestors {
    next: Option<Node>,
}

impl Iterator for Ancestors {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let node = self.next.take()?;
        self.next = node.parent();
        Some(node)
    }
}

/// A [`Node`] known to be an element.
///
/// Derefs to [`Node`] for the tree operations, the same way element types
/// build on node types in the browser bindings.
#[derive(Clone, PartialEq, Eq)]
pub struct Element(Node);

impl Element {
    /// Creates a detached element. Tag names are stored lower-cased.
    pub fn new(tag: &str) -> Self {
        Self::with_attributes(tag, Vec::new())
    }

    pub(crate) fn with_attributes(tag: &str, attributes: Vec<(String, String)>) -> Self {
        Element(Node::from_data(NodeData::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            attributes: RefCell::new(attributes),
            value: RefCell::new(None),
        })))
    }

    fn data(&self) -> &ElementData {
        match &self.0 .0.data {
            NodeData::Element(data) => data,
            _ => unreachable!("Element always wraps element data"),
        }
    }

    pub fn as_node(&self) -> &Node {
        &self.0
    }

    pub fn into_node(self) -> Node {
        self.0
    }

    /// Lower-case local name, e.g. `"div"`.
    pub fn tag_name(&self) -> &str {
        &self.data().tag
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn attr(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.data()
            .attributes
            .borrow()
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Attributes in source order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.data().attributes.borrow().clone()
    }

    pub fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        validate_attribute_name(name)?;
        let name = name.to_ascii_lowercase();
        let mut attributes = self.data().attributes.borrow_mut();
        match attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, current)) => *current = value.to_string(),
            None => attributes.push((name, value.to_string())),
        }
        Ok(())
    }

    pub fn remove_attribute(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        let mut attributes = self.data().attributes.borrow_mut();
        let before = attributes.len();
        attributes.retain(|(key, _)| *key != name);
        attributes.len() != before
    }

    pub fn id(&self) -> Option<String> {
        self.attr("id")
    }

    // ------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------

    pub fn class_list(&self) -> Vec<String> {
        self.attr("class")
            .map(|classes| classes.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.class_list().iter().any(|class| class == name)
    }

    pub fn add_class(&self, name: &str) -> Result<(), DomError> {
        validate_class_token(name)?;
        let mut classes = self.class_list();
        if !classes.iter().any(|class| class == name) {
            classes.push(name.to_string());
        }
        self.set_class_list(&classes);
        Ok(())
    }

    pub fn remove_class(&self, name: &str) -> Result<(), DomError> {
        validate_class_token(name)?;
        let mut classes = self.class_list();
        classes.retain(|class| class != name);
        self.set_class_list(&classes);
        Ok(())
    }

    /// Overwrites the `class` attribute with `classes`, dropping duplicates.
    pub fn set_class_list(&self, classes: &[String]) {
        let mut unique: Vec<&str> = Vec::with_capacity(classes.len());
        for class in classes {
            if !unique.contains(&class.as_str()) {
                unique.push(class);
            }
        }
        let mut attributes = self.data().attributes.borrow_mut();
        let joined = unique.join(" ");
        match attributes.iter_mut().find(|(key, _)| key == "class") {
            Some((_, current)) => *current = joined,
            None if joined.is_empty() => {}
            None => attributes.push(("class".to_string(), joined)),
        }
    }

    // ------------------------------------------------------------------
    // Inline style
    // ------------------------------------------------------------------

    /// Declarations of the `style` attribute in order, names in kebab-case.
    pub fn style_declarations(&self) -> Vec<(String, String)> {
        self.attr("style")
            .map(|style| {
                style
                    .split(';')
                    .filter_map(|declaration| {
                        let (name, value) = declaration.split_once(':')?;
                        let name = name.trim();
                        (!name.is_empty())
                            .then(|| (name.to_ascii_lowercase(), value.trim().to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn style_property(&self, property: &str) -> Option<String> {
        let property = css_property_name(property);
        self.style_declarations()
            .into_iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    /// Sets one inline declaration. An empty value removes the property.
    /// `backgroundColor` and `background-color` address the same property.
    pub fn set_style_property(&self, property: &str, value: &str) -> Result<(), DomError> {
        if property.trim().is_empty() {
            return Err(DomError::InvalidArgument(
                "CSS property name must not be empty".to_string(),
            ));
        }
        validate_style_token("property name", property)?;
        validate_style_token("value", value)?;
        let property = css_property_name(property.trim());
        let mut declarations = self.style_declarations();
        let value = value.trim();

        match declarations.iter().position(|(name, _)| *name == property) {
            Some(index) if value.is_empty() => {
                declarations.remove(index);
            }
            Some(index) => declarations[index].1 = value.to_string(),
            None if value.is_empty() => {}
            None => declarations.push((property, value.to_string())),
        }

        let style = declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute("style", &style)
    }

    // ------------------------------------------------------------------
    // Form controls
    // ------------------------------------------------------------------

    /// Live value of a form control; falls back to the `value` attribute.
    pub fn value(&self) -> String {
        self.data()
            .value
            .borrow()
            .clone()
            .or_else(|| self.attr("value"))
            .unwrap_or_default()
    }

    pub fn set_value(&self, value: &str) {
        *self.data().value.borrow_mut() = Some(value.to_string());
    }

    /// `type` of an input, lower-cased, `"text"` when absent.
    pub fn input_type(&self) -> String {
        self.attr("type")
            .map(|kind| kind.to_ascii_lowercase())
            .unwrap_or_else(|| "text".to_string())
    }

    // ------------------------------------------------------------------
    // Markup
    // ------------------------------------------------------------------

    pub fn inner_html(&self) -> String {
        serialize::inner_html(self.as_node())
    }

    /// Replaces the children with the parsed `markup`.
    pub fn set_inner_html(&self, markup: &str) -> Result<(), DomError> {
        self.replace_children(parse_fragment(markup))
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    /// First descendant matching `selector`, in document order.
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, DomError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self
            .descendants()
            .filter_map(|node| node.as_element())
            .find(|element| selector.matches(element)))
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self
            .descendants()
            .filter_map(|node| node.as_element())
            .filter(|element| selector.matches(element))
            .collect())
    }

    pub fn matches(&self, selector: &str) -> Result<bool, DomError> {
        Ok(SelectorList::parse(selector)?.matches(self))
    }

    /// This element or its nearest ancestor matching `selector`.
    pub fn closest(&self, selector: &str) -> Result<Option<Element>, DomError> {
        let selector = SelectorList::parse(selector)?;
        Ok(std::iter::once(self.clone())
            .chain(self.ancestors().filter_map(|node| node.as_element()))
            .find(|element| selector.matches(element)))
    }
}

impl Deref for Element {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl AsRef<Node> for Element {
    fn as_ref(&self) -> &Node {
        &self.0
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        element.0
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

fn validate_attribute_name(name: &str) -> Result<(), DomError> {
    let invalid = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'));
    if invalid {
        return Err(DomError::InvalidArgument(format!(
            "`{name}` is not a valid attribute name"
        )));
    }
    Ok(())
}

fn validate_class_token(name: &str) -> Result<(), DomError> {
    if name.is_empty() {
        return Err(DomError::InvalidArgument(
            "class name must not be empty".to_string(),
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(DomError::InvalidArgument(format!(
            "class name `{name}` must not contain whitespace"
        )));
    }
    Ok(())
}

/// Declarations are joined into the `style` attribute, so neither half may
/// carry its own separators.
fn validate_style_token(what: &str, token: &str) -> Result<(), DomError> {
    if token.contains([';', ':']) {
        return Err(DomError::InvalidArgument(format!(
            "CSS {what} `{token}` must not contain `;` or `:`"
        )));
    }
    Ok(())
}

/// `backgroundColor` -> `background-color`. Custom properties are kept as-is.
fn css_property_name(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    let mut name = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_moves_node_between_parents() {
        let first = Element::new("div");
        let second = Element::new("div");
        let child = Element::new("span");

        first.append_child(&child).unwrap();
        second.append_child(&child).unwrap();

        assert!(!first.has_children());
        assert_eq!(child.parent().as_ref(), Some(second.as_node()));
    }

    #[test]
    fn test_append_rejects_cycles() {
        let outer = Element::new("div");
        let inner = Element::new("p");
        outer.append_child(&inner).unwrap();

        assert!(matches!(
            inner.append_child(&outer),
            Err(DomError::Hierarchy(_))
        ));
    }

    #[test]
    fn test_replace_with_keeps_position() {
        let parent = Element::new("ul");
        let items: Vec<Element> = ["a", "b", "c"]
            .iter()
            .map(|id| {
                let li = Element::new("li");
                li.set_attribute("id", id).unwrap();
                parent.append_child(&li).unwrap();
                li
            })
            .collect();

        let replacement = Element::new("p");
        items[1].replace_with(&replacement).unwrap();

        let tags: Vec<String> = parent
            .child_elements()
            .iter()
            .map(|el| el.tag_name().to_string())
            .collect();
        assert_eq!(tags, vec!["li", "p", "li"]);
        assert!(items[1].parent().is_none());
    }

    #[test]
    fn test_replace_with_requires_parent() {
        let orphan = Element::new("div");
        assert_eq!(
            orphan.replace_with(&Element::new("p")),
            Err(DomError::NoParent)
        );
    }

    #[test]
    fn test_class_list_operations() {
        let el = Element::new("div");
        el.add_class("a").unwrap();
        el.add_class("b").unwrap();
        el.add_class("a").unwrap();
        assert_eq!(el.class_list(), vec!["a", "b"]);

        el.remove_class("a").unwrap();
        assert_eq!(el.attr("class").as_deref(), Some("b"));

        assert!(el.add_class("").is_err());
        assert!(el.add_class("two words").is_err());
    }

    #[test]
    fn test_style_property_camel_case() {
        let el = Element::new("h1");
        el.set_style_property("color", "blue").unwrap();
        el.set_style_property("backgroundColor", "red").unwrap();
        assert_eq!(
            el.attr("style").as_deref(),
            Some("color: blue; background-color: red;")
        );
        assert_eq!(el.style_property("background-color").as_deref(), Some("red"));

        el.set_style_property("color", "").unwrap();
        assert_eq!(el.attr("style").as_deref(), Some("background-color: red;"));
    }

    #[test]
    fn test_style_property_rejects_separators() {
        let el = Element::new("p");
        assert!(el.set_style_property("color", "red; display: none").is_err());
        assert!(el.set_style_property("color", "red:").is_err());
        assert!(el.set_style_property("a;b", "red").is_err());
        assert_eq!(el.attr("style"), None);
    }

    #[test]
    fn test_value_falls_back_to_attribute() {
        let input = Element::new("input");
        input.set_attribute("value", "42").unwrap();
        assert_eq!(input.value(), "42");
        input.set_value("7");
        assert_eq!(input.value(), "7");
        assert_eq!(input.attr("value").as_deref(), Some("42"));
    }

    #[test]
    fn test_text_content_skips_comments() {
        let el = Element::new("p");
        el.set_inner_html("a<!-- hidden --><b>b</b>c").unwrap();
        assert_eq!(el.text_content(), "abc");

        el.set_text_content("plain");
        assert_eq!(el.inner_html(), "plain");
    }
}

// File: src/query.rs
// Purpose: RQuery, a chainable facade over a single element

use std::fmt;
use std::rc::Rc;

use crate::document::Document;
use crate::error::DomError;
use crate::event::{Event, EventHandler, EventType};
use crate::format::{card_input_value, number_input_value};
use crate::node::{Element, Node};

/// Chainable wrapper around one element.
///
/// Every precondition is checked eagerly: a missing match, a missing parent
/// or the wrong kind of element is an error at the call site, never a silent
/// no-op.
///
/// ```
/// use rspa_dom::{Document, RQuery};
///
/// let document = Document::with_body(r#"<div id="app"><h1>Home</h1></div>"#).unwrap();
/// RQuery::select(&document, "#app")
///     .unwrap()
///     .find("h1")
///     .unwrap()
///     .css("color", "blue")
///     .unwrap()
///     .add_class(["title", "large"])
///     .unwrap();
///
/// let h1 = document.query_selector("h1").unwrap().unwrap();
/// assert_eq!(h1.attr("style").as_deref(), Some("color: blue;"));
/// assert_eq!(h1.class_list(), vec!["title", "large"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RQuery {
    element: Element,
}

impl RQuery {
    /// Wraps an element that is already resolved.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Looks up the first element in `document` matching `selector`.
    pub fn select(document: &Document, selector: &str) -> Result<Self, DomError> {
        document
            .query_selector(selector)?
            .map(Self::new)
            .ok_or_else(|| DomError::NotFound {
                selector: selector.to_string(),
            })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }

    /* FIND */

    /// First descendant matching `selector`, wrapped.
    pub fn find(&self, selector: &str) -> Result<RQuery, DomError> {
        self.element
            .query_selector(selector)?
            .map(Self::new)
            .ok_or_else(|| DomError::NotFound {
                selector: selector.to_string(),
            })
    }

    /* INSERT */

    /// Appends `child` as the last child of the wrapped element.
    pub fn append(&self, child: &Node) -> Result<&Self, DomError> {
        self.element.append_child(child)?;
        Ok(self)
    }

    /// Inserts `node` right before the wrapped element.
    pub fn before(&self, node: &Node) -> Result<&Self, DomError> {
        let parent = self.element.parent().ok_or(DomError::NoParent)?;
        parent.insert_before(node, Some(self.element.as_node()))?;
        Ok(self)
    }

    pub fn html(&self) -> String {
        self.element.inner_html()
    }

    /// Replaces the whole content with parsed `markup`.
    pub fn set_html(&self, markup: &str) -> Result<&Self, DomError> {
        self.element.set_inner_html(markup)?;
        Ok(self)
    }

    pub fn text(&self) -> String {
        self.element.text_content()
    }

    /// Replaces the whole content with a text node.
    pub fn set_text(&self, text: &str) -> &Self {
        self.element.set_text_content(text);
        self
    }

    /* FORM */

    /// Sets attributes and an optional input listener on an `<input>`.
    pub fn input(&self, options: InputOptions) -> Result<&Self, DomError> {
        self.require_input(None)?;
        for (name, value) in &options.attributes {
            self.element.set_attribute(name, value)?;
        }
        if let Some(handler) = options.on_input {
            self.element
                .add_event_listener(EventType::Input, move |event| handler(event));
        }
        Ok(self)
    }

    /// Keeps only digits in an `<input type="number">` on every input
    /// event, truncated to `limit` characters when given.
    pub fn number_input(&self, limit: Option<usize>) -> Result<&Self, DomError> {
        self.require_input(Some("number"))?;
        self.element.add_event_listener(EventType::Input, move |event| {
            if let Some(input) = event.target_element() {
                input.set_value(&number_input_value(&input.value(), limit));
            }
        });
        Ok(self)
    }

    /// Formats an `<input type="text">` as a grouped card number on every
    /// input event.
    pub fn credit_card_input(&self) -> Result<&Self, DomError> {
        self.require_input(Some("text"))?;
        self.element.add_event_listener(EventType::Input, |event| {
            if let Some(input) = event.target_element() {
                input.set_value(&card_input_value(&input.value()));
            }
        });
        Ok(self)
    }

    fn require_input(&self, input_type: Option<&str>) -> Result<(), DomError> {
        let is_input = self.element.tag_name() == "input";
        match input_type {
            None if is_input => Ok(()),
            None => Err(DomError::WrongElement {
                expected: "an input".to_string(),
            }),
            Some(kind) if is_input && self.element.input_type() == kind => Ok(()),
            Some(kind) => Err(DomError::WrongElement {
                expected: format!("an input with type \"{kind}\""),
            }),
        }
    }

    /* EVENTS */

    /// Attaches a click listener for the lifetime of the element.
    pub fn click<F>(&self, handler: F) -> &Self
    where
        F: Fn(&Event) + 'static,
    {
        self.element.add_event_listener(EventType::Click, handler);
        self
    }

    /* STYLES */

    /// Sets one inline style property. Both arguments must be non-empty.
    pub fn css(&self, property: &str, value: &str) -> Result<&Self, DomError> {
        if property.trim().is_empty() || value.trim().is_empty() {
            return Err(DomError::InvalidArgument(
                "Property and value must be non-empty strings".to_string(),
            ));
        }
        self.element.set_style_property(property, value)?;
        Ok(self)
    }

    pub fn add_class(&self, names: impl Into<ClassNames>) -> Result<&Self, DomError> {
        for name in names.into().0 {
            self.element.add_class(&name)?;
        }
        Ok(self)
    }

    pub fn remove_class(&self, names: impl Into<ClassNames>) -> Result<&Self, DomError> {
        for name in names.into().0 {
            self.element.remove_class(&name)?;
        }
        Ok(self)
    }

    /* ATTRIBUTES */

    pub fn attr(&self, name: &str) -> Option<String> {
        self.element.attr(name)
    }

    pub fn set_attr(&self, name: &str, value: &str) -> Result<&Self, DomError> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }
}

impl From<Element> for RQuery {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl fmt::Debug for RQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RQuery").field(&self.element).finish()
    }
}

/// One class name or several, accepted by [`RQuery::add_class`] and
/// [`RQuery::remove_class`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl From<&str> for ClassNames {
    fn from(name: &str) -> Self {
        ClassNames(vec![name.to_string()])
    }
}

impl From<String> for ClassNames {
    fn from(name: String) -> Self {
        ClassNames(vec![name])
    }
}

impl From<&[&str]> for ClassNames {
    fn from(names: &[&str]) -> Self {
        ClassNames(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassNames {
    fn from(names: [&str; N]) -> Self {
        ClassNames(names.iter().map(|name| name.to_string()).collect())
    }
}

impl From<Vec<&str>> for ClassNames {
    fn from(names: Vec<&str>) -> Self {
        ClassNames(names.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for ClassNames {
    fn from(names: Vec<String>) -> Self {
        ClassNames(names)
    }
}

/// Options for [`RQuery::input`]: attributes to set plus an optional
/// listener for `input` events.
#[derive(Clone, Default)]
pub struct InputOptions {
    attributes: Vec<(String, String)>,
    on_input: Option<EventHandler>,
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn on_input<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        self.on_input = Some(Rc::new(handler));
        self
    }
}

impl fmt::Debug for InputOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputOptions")
            .field("attributes", &self.attributes)
            .field("on_input", &self.on_input.is_some())
            .finish()
    }
}

// File: src/style.rs
// Purpose: Logical to scoped class-name maps (CSS modules)

use std::collections::HashMap;

use rspa_dom::Element;
use serde::Deserialize;

use crate::error::RenderError;

/// Maps class names as written in a template to their scoped names.
///
/// The usual source is the JSON manifest a CSS-modules build writes next to
/// the stylesheet:
///
/// ```
/// use rspa_render::StyleMap;
///
/// let styles = StyleMap::from_json(r#"{ "card": "card_x7f2" }"#).unwrap();
/// assert_eq!(styles.scoped("card"), "card_x7f2");
/// assert_eq!(styles.scoped("other"), "other");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    classes: HashMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(manifest: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(manifest)?)
    }

    pub fn get(&self, class: &str) -> Option<&str> {
        self.classes.get(class).map(String::as_str)
    }

    /// Scoped name for `class`, or `class` itself when unmapped.
    pub fn scoped<'a>(&'a self, class: &'a str) -> &'a str {
        self.get(class).unwrap_or(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Rewrites the class list of `element`. Every token is looked up once,
    /// so a scoped name that happens to be a key itself is not mapped again.
    /// Returns whether anything changed.
    pub(crate) fn apply(&self, element: &Element) -> bool {
        let classes = element.class_list();
        if classes.is_empty() {
            return false;
        }
        let scoped: Vec<String> = classes
            .iter()
            .map(|class| self.scoped(class).to_string())
            .collect();
        if scoped == classes {
            return false;
        }
        element.set_class_list(&scoped);
        true
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self {
            classes: pairs
                .into_iter()
                .map(|(logical, scoped)| (logical.into(), scoped.into()))
                .collect(),
        }
    }
}

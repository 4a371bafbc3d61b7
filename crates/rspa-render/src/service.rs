// File: src/service.rs
// Purpose: Builds live element trees from template markup

use once_cell::sync::Lazy;
use regex::Regex;
use rspa_dom::{parse_fragment, Element, NodeKind};
use tracing::{debug, error, warn};

use crate::component::ComponentEntry;
use crate::error::RenderError;
use crate::style::StyleMap;

/// Tag prefix marking a component placeholder.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "component";

static DEFAULT_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| placeholder_pattern(DEFAULT_PLACEHOLDER_PREFIX).unwrap());

fn placeholder_pattern(prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i)^{}-?([a-z0-9][a-z0-9-]*)$",
        regex::escape(prefix)
    ))
}

/// Turns template markup into an element tree.
///
/// A build runs three steps in a fixed order:
/// 1. the trimmed markup is parsed and its first top-level element becomes
///    the root
/// 2. class names on the root and its descendants are rewritten through the
///    optional [`StyleMap`]
/// 3. every placeholder below the root is replaced by the tree of the
///    matching [`ComponentEntry`]
///
/// Sub-trees inserted in step 3 were built by their own components, so the
/// parent's style map never reaches them. The service keeps no state between
/// builds.
#[derive(Debug, Clone)]
pub struct RenderService {
    prefix: String,
    pattern: Regex,
}

impl RenderService {
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            pattern: DEFAULT_PLACEHOLDER.clone(),
        }
    }

    /// Service recognising `<{prefix}Name>` placeholders instead.
    pub fn with_prefix(prefix: &str) -> Result<Self, RenderError> {
        let valid = prefix.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(RenderError::InvalidPrefix(prefix.to_string()));
        }
        let pattern =
            placeholder_pattern(prefix).map_err(|_| RenderError::InvalidPrefix(prefix.to_string()))?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Component identifier of a placeholder element, hyphens included.
    pub fn placeholder_ident(&self, element: &Element) -> Option<String> {
        self.pattern
            .captures(element.tag_name())
            .and_then(|caps| caps.get(1))
            .map(|ident| ident.as_str().to_string())
    }

    pub fn build(
        &self,
        markup: &str,
        components: &[ComponentEntry],
        styles: Option<&StyleMap>,
    ) -> Result<Element, RenderError> {
        let root = template_root(markup)?;

        if let Some(styles) = styles {
            scope_classes(&root, styles);
        }

        self.substitute_placeholders(&root, components)?;
        Ok(root)
    }

    fn substitute_placeholders(
        &self,
        root: &Element,
        components: &[ComponentEntry],
    ) -> Result<(), RenderError> {
        let placeholders: Vec<(Element, String)> = root
            .descendants()
            .filter_map(|node| node.as_element())
            .filter_map(|element| {
                let ident = self.placeholder_ident(&element)?;
                Some((element, ident))
            })
            .collect();

        for (placeholder, ident) in placeholders {
            // Nested inside a placeholder that was already replaced.
            if !root.contains(&placeholder) {
                continue;
            }
            let Some(entry) = components.iter().find(|entry| entry.answers_to(&ident)) else {
                error!(
                    placeholder = %placeholder.tag_name(),
                    "Component for placeholder <{}> not found",
                    placeholder.tag_name()
                );
                continue;
            };
            let rendered = entry.render()?;
            placeholder.replace_with(&rendered)?;
            debug!(key = %entry.key(), "substituted component placeholder");
        }
        Ok(())
    }
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds `markup` with the default placeholder prefix.
pub fn build(
    markup: &str,
    components: &[ComponentEntry],
    styles: Option<&StyleMap>,
) -> Result<Element, RenderError> {
    RenderService::new().build(markup, components, styles)
}

fn template_root(markup: &str) -> Result<Element, RenderError> {
    let mut root = None;
    for node in parse_fragment(markup.trim()) {
        match node.as_element() {
            Some(element) if root.is_none() => root = Some(element),
            _ => {
                let ignorable = match node.kind() {
                    NodeKind::Text => node.text_content().trim().is_empty(),
                    NodeKind::Comment => true,
                    _ => false,
                };
                if !ignorable {
                    warn!(node = ?node, "dropping extra top-level template node");
                }
            }
        }
    }
    root.ok_or(RenderError::EmptyTemplate)
}

fn scope_classes(root: &Element, styles: &StyleMap) {
    styles.apply(root);
    for element in root.descendants().filter_map(|node| node.as_element()) {
        styles.apply(&element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("componentuseritem", Some("useritem"))]
    #[case("component-user-item", Some("user-item"))]
    #[case("component", None)]
    #[case("div", None)]
    #[case("my-componentfoo", None)]
    fn test_placeholder_ident(#[case] tag: &str, #[case] expected: Option<&str>) {
        let service = RenderService::new();
        assert_eq!(
            service.placeholder_ident(&Element::new(tag)).as_deref(),
            expected
        );
    }

    #[test]
    fn test_custom_prefix() {
        let service = RenderService::with_prefix("x").unwrap();
        assert_eq!(
            service.placeholder_ident(&Element::new("x-card")).as_deref(),
            Some("card")
        );
        assert_eq!(service.placeholder_ident(&Element::new("componentcard")), None);
    }

    #[rstest]
    #[case("")]
    #[case("1up")]
    #[case("comp onent")]
    #[case("a.b")]
    fn test_invalid_prefix(#[case] prefix: &str) {
        assert!(matches!(
            RenderService::with_prefix(prefix),
            Err(RenderError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_template_root_skips_leading_whitespace_and_comments() {
        let root = template_root("\n  <!-- card --> <section><p>x</p></section>\n").unwrap();
        assert_eq!(root.tag_name(), "section");
    }

    #[test]
    fn test_template_without_element() {
        assert!(matches!(
            template_root("  just text  "),
            Err(RenderError::EmptyTemplate)
        ));
        assert!(matches!(template_root(""), Err(RenderError::EmptyTemplate)));
    }
}

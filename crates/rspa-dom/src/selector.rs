// File: src/selector.rs
// Purpose: CSS selector parsing and matching against live elements

use scraper::error::SelectorErrorKind;
use scraper::selector::{Parser as SelectorParser, Simple};
use selectors::attr::{AttrSelectorOperation, CaseSensitivity, NamespaceConstraint};
use selectors::bloom::BloomFilter;
use selectors::matching::{
    self, ElementSelectorFlags, MatchingContext, MatchingForInvalidation, MatchingMode,
    NeedsSelectorFlags, QuirksMode, SelectorCaches,
};
use selectors::parser::{ParseRelative, SelectorImpl, SelectorList as Selectors};
use selectors::OpaqueElement;

use crate::error::DomError;
use crate::node::{Element, Node, NodeKind};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

type Identifier = <Simple as SelectorImpl>::Identifier;

/// A parsed, comma-separated selector group.
#[derive(Debug, Clone)]
pub(crate) struct SelectorList(Selectors<Simple>);

impl SelectorList {
    pub(crate) fn parse(selector: &str) -> Result<Self, DomError> {
        let mut input = cssparser::ParserInput::new(selector);
        let mut parser = cssparser::Parser::new(&mut input);
        Selectors::parse(&SelectorParser, &mut parser, ParseRelative::No)
            .map(SelectorList)
            .map_err(|err| DomError::InvalidSelector {
                selector: selector.to_string(),
                reason: SelectorErrorKind::from(err).to_string(),
            })
    }

    pub(crate) fn matches(&self, element: &Element) -> bool {
        let mut caches = SelectorCaches::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut caches,
            QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            MatchingForInvalidation::No,
        );
        self.0
            .slice()
            .iter()
            .any(|selector| matching::matches_selector(selector, 0, None, element, &mut context))
    }
}

/// Element siblings in the given direction, skipping text and comments.
fn sibling_element(element: &Element, forward: bool) -> Option<Element> {
    let siblings = Node::parent(element)?.child_elements();
    let index = siblings.iter().position(|sibling| sibling == element)?;
    let target = if forward {
        index.checked_add(1)?
    } else {
        index.checked_sub(1)?
    };
    siblings.get(target).cloned()
}

// Inherent methods are called by path: several share a name with the trait's.
impl selectors::Element for Element {
    type Impl = Simple;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(&*self.as_node().0)
    }

    fn parent_element(&self) -> Option<Self> {
        Node::parent_element(self)
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        sibling_element(self, false)
    }

    fn next_sibling_element(&self) -> Option<Self> {
        sibling_element(self, true)
    }

    fn first_element_child(&self) -> Option<Self> {
        Node::child_elements(self).into_iter().next()
    }

    fn is_html_element_in_html_document(&self) -> bool {
        true
    }

    fn has_local_name(&self, local_name: &<Simple as SelectorImpl>::BorrowedLocalName) -> bool {
        Element::tag_name(self) == &*local_name.0
    }

    fn has_namespace(&self, ns: &<Simple as SelectorImpl>::BorrowedNamespaceUrl) -> bool {
        &**ns == HTML_NAMESPACE
    }

    fn is_same_type(&self, other: &Self) -> bool {
        Element::tag_name(self) == Element::tag_name(other)
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&<Simple as SelectorImpl>::NamespaceUrl>,
        local_name: &<Simple as SelectorImpl>::LocalName,
        operation: &AttrSelectorOperation<&<Simple as SelectorImpl>::AttrValue>,
    ) -> bool {
        // Attributes live in the null namespace.
        if let NamespaceConstraint::Specific(url) = ns {
            if !url.is_empty() {
                return false;
            }
        }
        Element::attr(self, &local_name.0).is_some_and(|value| operation.eval_str(&value))
    }

    fn match_non_ts_pseudo_class(
        &self,
        _pseudo_class: &<Simple as SelectorImpl>::NonTSPseudoClass,
        _context: &mut MatchingContext<Simple>,
    ) -> bool {
        false
    }

    fn match_pseudo_element(
        &self,
        _pseudo_element: &<Simple as SelectorImpl>::PseudoElement,
        _context: &mut MatchingContext<Simple>,
    ) -> bool {
        false
    }

    fn apply_selector_flags(&self, _flags: ElementSelectorFlags) {}

    fn is_link(&self) -> bool {
        matches!(Element::tag_name(self), "a" | "area" | "link")
            && Element::has_attribute(self, "href")
    }

    fn is_html_slot_element(&self) -> bool {
        false
    }

    fn has_id(&self, id: &Identifier, case_sensitivity: CaseSensitivity) -> bool {
        Element::id(self)
            .is_some_and(|value| case_sensitivity.eq(id.0.as_bytes(), value.as_bytes()))
    }

    fn has_class(&self, name: &Identifier, case_sensitivity: CaseSensitivity) -> bool {
        Element::class_list(self)
            .iter()
            .any(|class| case_sensitivity.eq(name.0.as_bytes(), class.as_bytes()))
    }

    fn has_custom_state(&self, _name: &Identifier) -> bool {
        false
    }

    fn imported_part(&self, _name: &Identifier) -> Option<Identifier> {
        None
    }

    fn is_part(&self, _name: &Identifier) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        Node::children(self).iter().all(|child| match child.kind() {
            NodeKind::Element => false,
            NodeKind::Text => child.text_data().unwrap_or_default().is_empty(),
            NodeKind::Comment | NodeKind::Document => true,
        })
    }

    fn is_root(&self) -> bool {
        Node::parent(self).is_some_and(|parent| parent.kind() == NodeKind::Document)
    }

    fn add_element_unique_hashes(&self, _filter: &mut BloomFilter) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_fragment;

    fn tree() -> Element {
        parse_fragment(
            r#"<div id="root" class="layout"><header><a href="/">Home</a></header><main class="content wide"><section><p data-kind="intro lead">x</p><p class="note"></p></section></main></div>"#,
        )[0]
        .as_element()
        .unwrap()
    }

    fn first_tag(root: &Element, selector: &str) -> Option<String> {
        root.query_selector(selector)
            .unwrap()
            .map(|element| element.tag_name().to_string())
    }

    #[test]
    fn test_simple_selectors() {
        let root = tree();
        assert_eq!(first_tag(&root, "main"), Some("main".to_string()));
        assert_eq!(first_tag(&root, ".wide"), Some("main".to_string()));
        assert_eq!(first_tag(&root, "main.content.wide"), Some("main".to_string()));
        assert_eq!(first_tag(&root, "[data-kind~=intro]"), Some("p".to_string()));
        assert_eq!(first_tag(&root, "a[href^='/']"), Some("a".to_string()));
        assert_eq!(first_tag(&root, "[data-kind$=lead]"), Some("p".to_string()));
        assert_eq!(first_tag(&root, "[class*=ten]"), Some("main".to_string()));
        assert_eq!(first_tag(&root, "footer"), None);
    }

    #[test]
    fn test_combinators() {
        let root = tree();
        assert_eq!(first_tag(&root, "main p"), Some("p".to_string()));
        assert_eq!(first_tag(&root, "main > section"), Some("section".to_string()));
        assert_eq!(first_tag(&root, "main > p"), None);
        assert_eq!(first_tag(&root, "#root header>a"), Some("a".to_string()));
        assert_eq!(first_tag(&root, "header + main"), Some("main".to_string()));
    }

    #[test]
    fn test_structural_pseudo_classes() {
        let root = tree();
        let last = root.query_selector("section > p:last-child").unwrap().unwrap();
        assert!(last.has_class("note"));
        let empty = root.query_selector("p:empty").unwrap().unwrap();
        assert!(empty.has_class("note"));
        let first = root.query_selector("p:not(.note)").unwrap().unwrap();
        assert_eq!(first.text_content(), "x");
    }

    #[test]
    fn test_selector_list_uses_document_order() {
        let root = tree();
        assert_eq!(first_tag(&root, "p, header"), Some("header".to_string()));
    }

    #[test]
    fn test_closest_walks_ancestors() {
        let root = tree();
        let p = root.query_selector("p").unwrap().unwrap();
        let main = p.closest("main.content").unwrap().unwrap();
        assert_eq!(main.tag_name(), "main");
        assert_eq!(p.closest("footer").unwrap(), None);
    }

    #[test]
    fn test_invalid_selectors() {
        for selector in ["", "  ", "div,", "a:hover", "..a", "div >"] {
            assert!(
                matches!(
                    SelectorList::parse(selector),
                    Err(DomError::InvalidSelector { .. })
                ),
                "{selector:?} should be rejected"
            );
        }
    }
}

use rspa_dom::Element;
use rspa_render::{build, Component, RenderError};

const TEMPLATE: &str = include_str!("auth.template.html");

/// Where logging out lands.
#[derive(Debug, Clone, Default)]
pub struct Auth;

impl Component for Auth {
    fn render(&self) -> Result<Element, RenderError> {
        build(TEMPLATE, &[], None)
    }

    fn title(&self) -> Option<String> {
        Some("Signed out".to_string())
    }
}

use rspa_dom::Element;
use rspa_render::{build, Component, Registered, RenderError, StyleMap};

const TEMPLATE: &str = include_str!("logo.template.html");
const STYLES: &str = include_str!("logo.module.json");

/// Home link in the header.
#[derive(Debug, Clone, Default)]
pub struct Logo;

impl Component for Logo {
    fn render(&self) -> Result<Element, RenderError> {
        build(TEMPLATE, &[], Some(&StyleMap::from_json(STYLES)?))
    }
}

impl Registered for Logo {
    const KEY: &'static str = "Logo";
}

use rspa_dom::Element;
use rspa_render::{build, Component, Registered, RenderError, StyleMap};

const TEMPLATE: &str = include_str!("loader.template.html");
const STYLES: &str = include_str!("loader.module.json");

pub const LOADER_SELECTOR: &str = "[data-component=\"loader\"]";

/// Three pulsing dots.
#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Component for Loader {
    fn render(&self) -> Result<Element, RenderError> {
        build(TEMPLATE, &[], Some(&StyleMap::from_json(STYLES)?))
    }
}

impl Registered for Loader {
    const KEY: &'static str = "Loader";
}

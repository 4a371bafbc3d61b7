use rspa_dom::{Element, InputOptions, RQuery};
use rspa_render::{build, Component, Registered, RenderError};
use tracing::debug;

const TEMPLATE: &str = include_str!("search.template.html");

#[derive(Debug, Clone, Default)]
pub struct Search;

impl Component for Search {
    fn render(&self) -> Result<Element, RenderError> {
        let element = build(TEMPLATE, &[], None)?;

        RQuery::new(element.clone()).find("input")?.input(
            InputOptions::new()
                .attribute("placeholder", "Search contacts")
                .attribute("autocomplete", "off")
                .on_input(|event| {
                    if let Some(input) = event.target_element() {
                        debug!(query = %input.value(), "search input");
                    }
                }),
        )?;

        Ok(element)
    }
}

impl Registered for Search {
    const KEY: &'static str = "Search";
}

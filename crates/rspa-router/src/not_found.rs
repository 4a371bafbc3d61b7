// File: src/not_found.rs
// Purpose: Built-in screen for paths without a route

use rspa_dom::Element;
use rspa_render::{build, Component, RenderError};

#[derive(Debug, Clone, Default)]
pub struct NotFound;

impl Component for NotFound {
    fn render(&self) -> Result<Element, RenderError> {
        build(
            r#"<div class="not-found"><h1>404</h1><p>Page not found</p></div>"#,
            &[],
            None,
        )
    }

    fn title(&self) -> Option<String> {
        Some("Not found".to_string())
    }
}

// File: src/layout.rs
// Purpose: The persistent layout shell and what it is built from

use std::rc::Rc;

use rspa_dom::{Element, RQuery};
use rspa_render::{build, Component, RenderError};

use crate::router::WeakRouter;

/// Handed to the layout factory once, on the first mount.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    /// For chrome that navigates, e.g. a logout button.
    pub router: WeakRouter,
    /// The first screen, to be placed in the content region.
    pub children: Element,
}

pub type LayoutFactory = Rc<dyn Fn(LayoutContext) -> Box<dyn Component>>;

/// Bare shell: a `<main>` content region and nothing else.
#[derive(Debug, Clone)]
pub struct DefaultLayout {
    children: Element,
}

impl DefaultLayout {
    pub fn new(context: LayoutContext) -> Self {
        Self {
            children: context.children,
        }
    }
}

impl Component for DefaultLayout {
    fn render(&self) -> Result<Element, RenderError> {
        let shell = build(r#"<div class="layout"><main></main></div>"#, &[], None)?;
        RQuery::new(shell.clone())
            .find("main")?
            .append(self.children.as_node())?;
        Ok(shell)
    }
}

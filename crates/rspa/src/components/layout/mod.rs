use rspa_dom::{Element, RQuery};
use rspa_render::{build, Component, ComponentEntry, RenderError, StyleMap};
use rspa_router::{LayoutContext, WeakRouter};

use super::header::Header;

const TEMPLATE: &str = include_str!("layout.template.html");
const STYLES: &str = include_str!("layout.module.json");

/// Header plus the `<main>` region screens are swapped into.
#[derive(Debug, Clone)]
pub struct Layout {
    router: WeakRouter,
    children: Element,
}

impl Layout {
    pub fn new(context: LayoutContext) -> Self {
        Self {
            router: context.router,
            children: context.children,
        }
    }
}

impl Component for Layout {
    fn render(&self) -> Result<Element, RenderError> {
        let element = build(
            TEMPLATE,
            &[ComponentEntry::instance(Header::new(self.router.clone()))],
            Some(&StyleMap::from_json(STYLES)?),
        )?;

        RQuery::new(element.clone())
            .find("main")?
            .append(self.children.as_node())?;

        Ok(element)
    }
}

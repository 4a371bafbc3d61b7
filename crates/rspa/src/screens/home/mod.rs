use rspa_dom::{Element, RQuery};
use rspa_render::{build, Component, ComponentEntry, RenderError, StyleMap};
use tracing::info;

use crate::components::header::demo_user;
use crate::components::{Loader, UserItem};

const TEMPLATE: &str = include_str!("home.template.html");
const STYLES: &str = include_str!("home.module.json");

#[derive(Debug, Clone, Default)]
pub struct Home;

impl Component for Home {
    fn render(&self) -> Result<Element, RenderError> {
        let element = build(
            TEMPLATE,
            &[
                ComponentEntry::instance(Loader),
                ComponentEntry::instance(
                    UserItem::new(demo_user())
                        .gray()
                        .on_click(|| info!("contact selected")),
                ),
            ],
            Some(&StyleMap::from_json(STYLES)?),
        )?;

        RQuery::new(element.clone()).find("h1")?.css("color", "blue")?;

        Ok(element)
    }

    fn title(&self) -> Option<String> {
        Some("Home".to_string())
    }
}

use rspa_dom::Element;
use rspa_render::{build, Component, ComponentEntry, Registered, RenderError, StyleMap};
use rspa_router::WeakRouter;
use tracing::info;

use super::logo::Logo;
use super::logout_button::LogoutButton;
use super::search::Search;
use super::user_item::{User, UserItem};

const TEMPLATE: &str = include_str!("header.template.html");
const STYLES: &str = include_str!("header.module.json");

/// Account shown in the header until sign-in exists.
pub fn demo_user() -> User {
    User {
        avatar_path: "/static/avatars/guffi.jpg".to_string(),
        name: "Guffi".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    router: WeakRouter,
}

impl Header {
    pub fn new(router: WeakRouter) -> Self {
        Self { router }
    }
}

impl Component for Header {
    fn render(&self) -> Result<Element, RenderError> {
        build(
            TEMPLATE,
            &[
                ComponentEntry::factory::<Logo>(),
                ComponentEntry::instance(LogoutButton::new(self.router.clone())),
                ComponentEntry::factory::<Search>(),
                ComponentEntry::instance(
                    UserItem::new(demo_user()).on_click(|| info!("user item clicked")),
                ),
            ],
            Some(&StyleMap::from_json(STYLES)?),
        )
    }
}

impl Registered for Header {
    const KEY: &'static str = "Header";
}

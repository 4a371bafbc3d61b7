use std::fmt;
use std::rc::Rc;

use rspa_dom::{Element, RQuery};
use rspa_render::{build, Component, Registered, RenderError, StyleMap};

const TEMPLATE: &str = include_str!("user_item.template.html");
const STYLES: &str = include_str!("user_item.module.json");

/// Who a [`UserItem`] shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub avatar_path: String,
    pub name: String,
}

/// Avatar and name as a clickable chip.
#[derive(Clone)]
pub struct UserItem {
    user: User,
    is_gray: bool,
    on_click: Option<Rc<dyn Fn()>>,
}

impl UserItem {
    pub fn new(user: User) -> Self {
        Self {
            user,
            is_gray: false,
            on_click: None,
        }
    }

    /// Muted background, for lists.
    pub fn gray(mut self) -> Self {
        self.is_gray = true;
        self
    }

    pub fn on_click<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }
}

impl Component for UserItem {
    fn render(&self) -> Result<Element, RenderError> {
        let styles = StyleMap::from_json(STYLES)?;
        let element = build(TEMPLATE, &[], Some(&styles))?;
        let item = RQuery::new(element.clone());

        item.find("img")?
            .set_attr("src", &self.user.avatar_path)?
            .set_attr("alt", &self.user.name)?;
        item.find("span")?.set_text(&self.user.name);

        if self.is_gray {
            item.add_class(styles.scoped("gray"))?;
        }
        if let Some(handler) = &self.on_click {
            let handler = Rc::clone(handler);
            item.click(move |_| handler());
        }

        Ok(element)
    }
}

impl Registered for UserItem {
    const KEY: &'static str = "UserItem";
}

impl fmt::Debug for UserItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserItem")
            .field("user", &self.user)
            .field("is_gray", &self.is_gray)
            .finish_non_exhaustive()
    }
}

use rspa_dom::{Element, RQuery};
use rspa_render::{build, Component, Registered, RenderError};
use rspa_router::WeakRouter;
use tracing::error;

const TEMPLATE: &str = include_str!("logout_button.template.html");

/// Path the button sends the user to.
pub const SIGNED_OUT_PATH: &str = "/auth";

#[derive(Debug, Clone)]
pub struct LogoutButton {
    router: WeakRouter,
}

impl LogoutButton {
    pub fn new(router: WeakRouter) -> Self {
        Self { router }
    }
}

impl Component for LogoutButton {
    fn render(&self) -> Result<Element, RenderError> {
        let element = build(TEMPLATE, &[], None)?;

        let router = self.router.clone();
        RQuery::new(element.clone()).click(move |_| {
            if let Err(err) = router.navigate(SIGNED_OUT_PATH) {
                error!("Logout navigation failed: {err}");
            }
        });

        Ok(element)
    }
}

impl Registered for LogoutButton {
    const KEY: &'static str = "LogoutButton";
}

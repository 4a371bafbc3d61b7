// File: src/app.rs
// Purpose: Boots the demo app: host document, window and router

use anyhow::{Context, Result};
use rspa_dom::{parse_body, Document, Window};
use rspa_router::{Route, Router};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::components::{Layout, SIGNED_OUT_PATH};
use crate::config::Config;
use crate::screens::{Auth, Home, Payment};

/// Body used when no index page is configured.
pub const DEFAULT_BODY: &str = r#"<div id="app"></div>"#;

/// The route table, in match order.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new::<Home>("/"),
        Route::new::<Payment>("/payment"),
        Route::new::<Auth>(SIGNED_OUT_PATH),
    ]
}

/// A running page session.
#[derive(Debug)]
pub struct App {
    document: Document,
    router: Router,
}

impl App {
    /// Loads the host page named in the config and starts the router on it.
    pub fn boot(config: &Config) -> Result<Self> {
        let body = match &config.app.index_html {
            Some(path) => load_body(path)?,
            None => DEFAULT_BODY.to_string(),
        };
        Self::boot_with_body(config, &body)
    }

    /// Starts the router on a document whose body is `body`.
    pub fn boot_with_body(config: &Config, body: &str) -> Result<Self> {
        let document = Document::with_body(body).context("Failed to build the host document")?;
        let window = Window::new(document.clone(), &config.app.origin, &config.app.entry_path)
            .with_context(|| {
                format!(
                    "Invalid start location {}{}",
                    config.app.origin, config.app.entry_path
                )
            })?;

        let router = Router::builder()
            .routes(routes())
            .config(config.router.clone())
            .layout(Layout::new)
            .start(window)
            .context("Failed to start the router")?;

        info!(app = %config.app.name, path = %router.current_path(), "app booted");
        Ok(Self { document, router })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigate(&self, path: &str) -> Result<()> {
        self.router
            .navigate(path)
            .with_context(|| format!("Failed to navigate to {path}"))
    }

    /// Steps back one history entry; `false` at the first entry.
    pub fn back(&self) -> bool {
        self.router.window().history().back()
    }

    /// Markup of the mount root, shell included.
    pub fn root_html(&self) -> String {
        self.document
            .get_element_by_id(&self.router.config().root_id)
            .map(|root| root.outer_html())
            .unwrap_or_default()
    }

    pub fn shutdown(&self) {
        self.router.shutdown();
    }
}

/// Body markup of an HTML page. Markup without `<body>` is treated as the
/// body itself.
pub fn body_markup(page: &str) -> String {
    parse_body(page)
        .iter()
        .map(|node| node.outer_html())
        .collect::<String>()
        .trim()
        .to_string()
}

fn load_body(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let page = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index page: {:?}", path))?;
    Ok(body_markup(&page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_markup_from_full_page() {
        let page = r#"<!DOCTYPE html>
<html lang="en">
  <head><title>rspa</title></head>
  <body><div id="app"></div><script src="/main.js"></script></body>
</html>"#;
        assert_eq!(
            body_markup(page),
            r#"<div id="app"></div><script src="/main.js"></script>"#
        );
    }

    #[test]
    fn test_body_markup_passes_fragments_through() {
        assert_eq!(body_markup(DEFAULT_BODY), DEFAULT_BODY);
    }

    #[test]
    fn test_route_paths() {
        let paths: Vec<String> = routes().iter().map(|r| r.path().to_string()).collect();
        assert_eq!(paths, vec!["/", "/payment", "/auth"]);
    }
}

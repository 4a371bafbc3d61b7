//! # rspa-router
//!
//! Client-side router for single-page applications built on rspa:
//! - exact, case-sensitive static paths, first match wins
//! - a built-in not-found screen for everything else
//! - history entries pushed on navigation, back/forward re-resolved
//! - one delegated click listener turning anchor clicks into navigations
//! - a layout shell mounted once, with only its content region replaced
//!   afterwards
//!
//! ## Example
//!
//! ```
//! use rspa_dom::{Document, Element, Window, DEFAULT_ORIGIN};
//! use rspa_render::{build, Component, RenderError};
//! use rspa_router::{Route, Router};
//!
//! #[derive(Default)]
//! struct Home;
//!
//! impl Component for Home {
//!     fn render(&self) -> Result<Element, RenderError> {
//!         build(r#"<h1>Home <a href="/about">About</a></h1>"#, &[], None)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct About;
//!
//! impl Component for About {
//!     fn render(&self) -> Result<Element, RenderError> {
//!         build("<h1>About</h1>", &[], None)
//!     }
//! }
//!
//! let document = Document::with_body(r#"<div id="app"></div>"#).unwrap();
//! let window = Window::new(document.clone(), DEFAULT_ORIGIN, "/").unwrap();
//! let router = Router::builder()
//!     .route(Route::new::<Home>("/"))
//!     .route(Route::new::<About>("/about"))
//!     .start(window)
//!     .unwrap();
//!
//! document.query_selector("a").unwrap().unwrap().click();
//!
//! assert_eq!(router.current_path(), "/about");
//! assert_eq!(document.query_selector("main h1").unwrap().unwrap().text_content(), "About");
//! assert!(document.hard_navigations().is_empty());
//! ```

mod config;
mod error;
mod layout;
mod not_found;
mod route;
mod router;

pub use config::RouterConfig;
pub use error::RouterError;
pub use layout::{DefaultLayout, LayoutContext, LayoutFactory};
pub use not_found::NotFound;
pub use route::{normalize_path, CurrentRoute, Route, RouteTable};
pub use router::{Router, RouterBuilder, WeakRouter};

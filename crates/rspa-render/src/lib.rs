//! # rspa-render
//!
//! Instantiates component templates for the rspa client framework.
//!
//! A component hands its markup, the components it embeds and its style map
//! to [`RenderService::build`] and gets a detached element tree back:
//!
//! ```
//! use rspa_dom::Element;
//! use rspa_render::{build, Component, ComponentEntry, Registered, RenderError, StyleMap};
//!
//! #[derive(Default)]
//! struct Loader;
//!
//! impl Component for Loader {
//!     fn render(&self) -> Result<Element, RenderError> {
//!         build(r#"<div class="spinner"></div>"#, &[], None)
//!     }
//! }
//!
//! impl Registered for Loader {
//!     const KEY: &'static str = "Loader";
//! }
//!
//! let styles: StyleMap = [("home", "home_a1")].into_iter().collect();
//! let home = build(
//!     r#"<section class="home"><h1>Home</h1><component-loader></component-loader></section>"#,
//!     &[ComponentEntry::factory::<Loader>()],
//!     Some(&styles),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     home.outer_html(),
//!     r#"<section class="home_a1"><h1>Home</h1><div class="spinner"></div></section>"#
//! );
//! ```

mod component;
mod error;
mod service;
mod style;

pub use component::{normalize_key, Component, ComponentEntry, ComponentFactory, Registered};
pub use error::RenderError;
pub use service::{build, RenderService, DEFAULT_PLACEHOLDER_PREFIX};
pub use style::StyleMap;

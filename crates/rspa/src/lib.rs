//! # rspa
//!
//! Demo single-page app on top of the rspa crates: a header shell with a
//! logo, search box, user chip and logout button, and three screens (home,
//! card payment, signed out).
//!
//! [`App::boot`] builds the host document from `rspa.toml`, starts the
//! router on it and keeps both alive for the session.

pub mod app;
pub mod components;
pub mod config;
pub mod screens;

pub use app::{body_markup, routes, App, DEFAULT_BODY};
pub use config::Config;

//! Screens, one per route.

pub mod auth;
pub mod home;
pub mod payment;

pub use auth::Auth;
pub use home::Home;
pub use payment::{Payment, AMOUNT_DIGITS};

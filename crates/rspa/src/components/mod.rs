//! Shared building blocks: the layout shell and the widgets it embeds.

pub mod header;
pub mod layout;
pub mod loader;
pub mod logo;
pub mod logout_button;
pub mod search;
pub mod user_item;

pub use header::Header;
pub use layout::Layout;
pub use loader::{Loader, LOADER_SELECTOR};
pub use logo::Logo;
pub use logout_button::{LogoutButton, SIGNED_OUT_PATH};
pub use search::Search;
pub use user_item::{User, UserItem};

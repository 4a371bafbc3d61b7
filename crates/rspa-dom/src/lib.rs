//! # rspa-dom
//!
//! In-process document model for the rspa client framework, plus the
//! chainable [`RQuery`] facade the components use to touch it.
//!
//! The model follows browser semantics closely enough for routing and
//! rendering to be exercised without a browser:
//! - shared node handles with weak parent links ([`Node`], [`Element`])
//! - HTML parsing through `scraper` (html5ever) and a matching serializer
//! - CSS selector matching through the `selectors` engine for
//!   `query_selector` / `closest`
//! - events that bubble to the [`Document`] and run default actions
//!   (an unprevented link click is recorded as a full page load)
//! - session [`History`] with pop-state listeners, and a [`Window`] tying
//!   document, history and origin together
//!
//! Everything is single-threaded: handles are `Rc`-based and listeners run
//! synchronously inside the dispatching call.

mod document;
mod error;
mod event;
mod format;
mod history;
mod node;
mod parser;
mod query;
mod selector;
mod serialize;
mod window;

pub use document::Document;
pub use error::DomError;
pub use event::{Event, EventHandler, EventType, ListenerId};
pub use format::{
    card_input_value, digits_only, format_card_number, format_card_number_with_dashes,
    number_input_value, CARD_NUMBER_DIGITS, CARD_NUMBER_SEPARATOR,
};
pub use history::{History, PopStateEvent};
pub use node::{Ancestors, Descendants, Element, Node, NodeKind};
pub use parser::{parse_body, parse_fragment};
pub use query::{ClassNames, InputOptions, RQuery};
pub use window::{Window, DEFAULT_ORIGIN};

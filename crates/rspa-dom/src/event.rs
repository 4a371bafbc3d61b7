// File: src/event.rs
// Purpose: Event objects, listener registration and bubbling dispatch

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::node::{Element, Node};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned by listener registration, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Input,
    Change,
    Submit,
    Custom(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Click => "click",
            EventType::Input => "input",
            EventType::Change => "change",
            EventType::Submit => "submit",
            EventType::Custom(name) => name,
        }
    }

    /// `input` events cannot be cancelled, everything else can.
    fn cancelable(&self) -> bool {
        !matches!(self, EventType::Input)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type EventHandler = Rc<dyn Fn(&Event)>;

pub(crate) struct EventListener {
    pub(crate) id: ListenerId,
    pub(crate) kind: EventType,
    pub(crate) handler: EventHandler,
}

/// An event travelling from its target up to the document.
pub struct Event {
    kind: EventType,
    cancelable: bool,
    target: RefCell<Option<Node>>,
    current_target: RefCell<Option<Node>>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl Event {
    pub fn new(kind: EventType) -> Self {
        Self {
            cancelable: kind.cancelable(),
            kind,
            target: RefCell::new(None),
            current_target: RefCell::new(None),
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn kind(&self) -> &EventType {
        &self.kind
    }

    /// Node the event was dispatched on.
    pub fn target(&self) -> Option<Node> {
        self.target.borrow().clone()
    }

    /// The target if it is an element, otherwise its parent element
    /// (clicks on text land on the text node).
    pub fn target_element(&self) -> Option<Element> {
        let target = self.target()?;
        target.as_element().or_else(|| target.parent_element())
    }

    /// Node whose listeners are currently running.
    pub fn current_target(&self) -> Option<Node> {
        self.current_target.borrow().clone()
    }

    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("target", &self.target.borrow())
            .field("default_prevented", &self.default_prevented.get())
            .finish()
    }
}

impl Node {
    pub fn add_event_listener<F>(&self, kind: EventType, handler: F) -> ListenerId
    where
        F: Fn(&Event) + 'static,
    {
        let id = ListenerId::next();
        self.0.listeners.borrow_mut().push(EventListener {
            id,
            kind,
            handler: Rc::new(handler),
        });
        id
    }

    /// Returns `false` if no listener with `id` was registered here.
    pub fn remove_event_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.0.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    fn handlers_for(&self, kind: &EventType) -> Vec<EventHandler> {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == *kind)
            .map(|listener| Rc::clone(&listener.handler))
            .collect()
    }

    /// Runs listeners on this node, then on each ancestor, then the default
    /// action. Returns `false` if a listener prevented the default.
    pub fn dispatch_event(&self, event: &Event) -> bool {
        *event.target.borrow_mut() = Some(self.clone());

        let path: Vec<Node> = std::iter::once(self.clone())
            .chain(self.ancestors())
            .collect();

        for node in path {
            *event.current_target.borrow_mut() = Some(node.clone());
            // Handlers may add or remove listeners while running.
            for handler in node.handlers_for(&event.kind) {
                handler(event);
            }
            if event.propagation_stopped() {
                break;
            }
        }
        *event.current_target.borrow_mut() = None;

        if event.default_prevented() {
            return false;
        }
        run_default_action(self, event);
        true
    }

    /// Dispatches a fresh click event, like a user click on this node.
    pub fn click(&self) -> bool {
        self.dispatch_event(&Event::new(EventType::Click))
    }
}

/// Following a hyperlink is the only default action modelled: it leaves the
/// page, which the document records.
fn run_default_action(target: &Node, event: &Event) {
    if event.kind != EventType::Click {
        return;
    }
    let anchor = std::iter::once(target.clone())
        .chain(target.ancestors())
        .filter_map(|node| node.as_element())
        .find(|element| element.tag_name() == "a" && element.has_attribute("href"));

    let (Some(anchor), Some(document)) = (anchor, target.owner_document()) else {
        return;
    };
    let href = anchor.attr("href").unwrap_or_default();
    debug!(href = %href, "following hyperlink with a full page load");
    document.record_hard_navigation(href);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_event_bubbles_from_target_to_ancestors() {
        let outer = Element::new("div");
        let inner = Element::new("span");
        outer.append_child(&inner).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        for (node, label) in [(outer.as_node(), "outer"), (inner.as_node(), "inner")] {
            let seen = Rc::clone(&seen);
            node.add_event_listener(EventType::Click, move |_| seen.borrow_mut().push(label));
        }

        inner.click();
        assert_eq!(*seen.borrow(), vec!["inner", "outer"]);
    }

    #[test]
    fn test_stop_propagation() {
        let outer = Element::new("div");
        let inner = Element::new("span");
        outer.append_child(&inner).unwrap();

        let reached = Rc::new(Cell::new(false));
        let flag = Rc::clone(&reached);
        outer.add_event_listener(EventType::Click, move |_| flag.set(true));
        inner.add_event_listener(EventType::Click, |event| event.stop_propagation());

        inner.click();
        assert!(!reached.get());
    }

    #[test]
    fn test_removed_listener_does_not_fire() {
        let button = Element::new("button");
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let id = button.add_event_listener(EventType::Click, move |_| {
            counter.set(counter.get() + 1)
        });

        button.click();
        assert!(button.remove_event_listener(id));
        button.click();

        assert_eq!(count.get(), 1);
        assert!(!button.remove_event_listener(id));
    }

    #[test]
    fn test_input_events_are_not_cancelable() {
        let input = Element::new("input");
        input.add_event_listener(EventType::Input, |event| event.prevent_default());
        assert!(input.dispatch_event(&Event::new(EventType::Input)));
    }
}

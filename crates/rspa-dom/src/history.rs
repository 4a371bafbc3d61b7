// File: src/history.rs
// Purpose: Session history with pop-state notifications

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::event::ListenerId;

/// Delivered to pop-state listeners after back/forward/go moved the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopStateEvent {
    /// Path of the entry that is now current.
    pub path: String,
}

type PopStateHandler = Rc<dyn Fn(&PopStateEvent)>;

struct HistoryInner {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    listeners: RefCell<Vec<(ListenerId, PopStateHandler)>>,
}

/// Session history of one window. Cloning yields another handle to the same
/// history.
///
/// `push_state` and `replace_state` never notify listeners; moving through
/// the history does, synchronously.
#[derive(Clone)]
pub struct History(Rc<HistoryInner>);

impl History {
    pub fn new(initial: &str) -> Self {
        History(Rc::new(HistoryInner {
            entries: RefCell::new(vec![initial.to_string()]),
            index: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Current entry as pushed, including any query or fragment.
    pub fn current(&self) -> String {
        self.0.entries.borrow()[self.0.index.get()].clone()
    }

    /// Path portion of the current entry.
    pub fn pathname(&self) -> String {
        let current = self.current();
        let end = current.find(|c: char| c == '?' || c == '#').unwrap_or(current.len());
        current[..end].to_string()
    }

    pub fn len(&self) -> usize {
        self.0.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an entry after the current one, dropping any forward entries.
    pub fn push_state(&self, url: &str) {
        let mut entries = self.0.entries.borrow_mut();
        let index = self.0.index.get();
        entries.truncate(index + 1);
        entries.push(url.to_string());
        self.0.index.set(index + 1);
        debug!(url, depth = entries.len(), "history entry pushed");
    }

    pub fn replace_state(&self, url: &str) {
        self.0.entries.borrow_mut()[self.0.index.get()] = url.to_string();
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Moves `delta` entries. Out of range moves and `0` do nothing and
    /// return `false`.
    pub fn go(&self, delta: isize) -> bool {
        let target = self.0.index.get() as isize + delta;
        if delta == 0 || target < 0 || target as usize >= self.len() {
            return false;
        }
        self.0.index.set(target as usize);

        let event = PopStateEvent {
            path: self.pathname(),
        };
        debug!(path = %event.path, "popstate");
        let handlers: Vec<PopStateHandler> = self
            .0
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(&event);
        }
        true
    }

    pub fn add_pop_state_listener<F>(&self, handler: F) -> ListenerId
    where
        F: Fn(&PopStateEvent) + 'static,
    {
        let id = ListenerId::next();
        self.0.listeners.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    pub fn remove_pop_state_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.0.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener, _)| *listener != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.0.entries.borrow())
            .field("index", &self.0.index.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_truncates_forward_entries() {
        let history = History::new("/");
        history.push_state("/a");
        history.push_state("/b");
        assert!(history.back());
        history.push_state("/c");

        assert_eq!(history.len(), 3);
        assert_eq!(history.pathname(), "/c");
        assert!(!history.forward());
    }

    #[test]
    fn test_pathname_drops_query_and_fragment() {
        let history = History::new("/search?q=1#top");
        assert_eq!(history.pathname(), "/search");
        assert_eq!(history.current(), "/search?q=1#top");
    }

    #[test]
    fn test_pop_state_fires_on_back_only() {
        let history = History::new("/");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = history.add_pop_state_listener(move |event| {
            sink.borrow_mut().push(event.path.clone())
        });

        history.push_state("/next");
        assert!(seen.borrow().is_empty());

        history.back();
        assert_eq!(*seen.borrow(), vec!["/".to_string()]);

        assert!(history.remove_pop_state_listener(id));
        history.forward();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_go_out_of_range_is_ignored() {
        let history = History::new("/");
        assert!(!history.back());
        assert!(!history.go(0));
        assert!(!history.go(3));
        assert_eq!(history.pathname(), "/");
    }
}

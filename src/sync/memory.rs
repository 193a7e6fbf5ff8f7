//! In-memory page handles for tests and headless use.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::dom::{ChangeHandler, FilterControl, ListContainer, Navigator, Subscription};

type HandlerList = RefCell<Vec<(u64, Rc<dyn Fn(&str)>)>>;

/// Container element holding a plain attribute map.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    attributes: RefCell<BTreeMap<String, String>>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&self, name: &str) {
        self.attributes.borrow_mut().remove(name);
    }
}

impl ListContainer for MemoryContainer {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

/// `<select>`-like control that dispatches change events on [`MemorySelect::select`].
pub struct MemorySelect {
    id: String,
    value: RefCell<String>,
    attributes: RefCell<BTreeMap<String, String>>,
    handlers: Rc<HandlerList>,
    next_handler: Cell<u64>,
}

impl MemorySelect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: RefCell::new(String::new()),
            attributes: RefCell::new(BTreeMap::new()),
            handlers: Rc::new(RefCell::new(Vec::new())),
            next_handler: Cell::new(0),
        }
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Sets the value and fires one change event, like a user selection.
    pub fn select(&self, value: &str) {
        self.value.replace(value.to_string());
        // Snapshot so handlers may (un)subscribe while being dispatched.
        let handlers: Vec<_> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(value);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl FilterControl for MemorySelect {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn on_change(&self, handler: ChangeHandler) -> Subscription {
        let key = self.next_handler.get();
        self.next_handler.set(key + 1);
        self.handlers.borrow_mut().push((key, Rc::from(handler)));

        let handlers: Weak<HandlerList> = Rc::downgrade(&self.handlers);
        Subscription::new(move || {
            if let Some(handlers) = handlers.upgrade() {
                handlers.borrow_mut().retain(|(k, _)| *k != key);
            }
        })
    }
}

/// Navigator that records every requested URL instead of loading it.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visits.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visits.borrow_mut().push(url.to_string());
    }
}

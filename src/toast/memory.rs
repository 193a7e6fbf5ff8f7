//! [`AlertHost`] backed by a plain element map.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::{AlertHost, ElementId, HostError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertElement {
    pub id: ElementId,
    pub classes: Vec<String>,
    pub text: String,
}

impl AlertElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Default)]
pub struct MemoryAlertHost {
    next_id: AtomicU64,
    elements: Mutex<BTreeMap<ElementId, AlertElement>>,
}

impl MemoryAlertHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements currently attached, in insertion order.
    pub fn elements(&self) -> Vec<AlertElement> {
        self.lock()
            .map(|elements| elements.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get(&self, id: ElementId) -> Option<AlertElement> {
        self.lock().ok()?.get(&id).cloned()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<ElementId, AlertElement>>, HostError> {
        self.elements
            .lock()
            .map_err(|err| HostError::Unavailable(err.to_string()))
    }

    fn update(&self, id: ElementId, f: impl FnOnce(&mut AlertElement)) -> Result<(), HostError> {
        let mut elements = self.lock()?;
        let element = elements.get_mut(&id).ok_or(HostError::Detached(id))?;
        f(element);
        Ok(())
    }
}

impl AlertHost for MemoryAlertHost {
    fn append(&self, classes: &[String], text: &str) -> Result<ElementId, HostError> {
        let id = ElementId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock()?.insert(
            id,
            AlertElement {
                id,
                classes: classes.to_vec(),
                text: text.to_string(),
            },
        );
        Ok(id)
    }

    fn add_class(&self, id: ElementId, class: &str) -> Result<(), HostError> {
        self.update(id, |element| {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        })
    }

    fn remove_class(&self, id: ElementId, class: &str) -> Result<(), HostError> {
        self.update(id, |element| element.classes.retain(|c| c != class))
    }

    fn remove(&self, id: ElementId) -> Result<(), HostError> {
        self.lock()?
            .remove(&id)
            .map(|_| ())
            .ok_or(HostError::Detached(id))
    }
}

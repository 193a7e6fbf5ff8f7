//! Handles through which the synchronizer talks to the page.
//!
//! The synchronizer never looks elements up by itself: callers pass the filter
//! control, the list container and the navigator explicitly, so any DOM
//! binding (or the in-memory one in [`super::memory`]) can drive it.

/// Callback invoked with the control's new value after each change.
pub type ChangeHandler = Box<dyn Fn(&str)>;

/// Element that carries the server-rendered pagination attributes.
pub trait ListContainer {
    /// Returns the raw attribute value, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Single-selection control bound to one filter parameter.
pub trait FilterControl {
    /// Stable element identifier.
    fn id(&self) -> String;

    /// Current selection, `""` when no filter is applied.
    fn value(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Registers `handler` for change events until the returned
    /// [`Subscription`] is dropped.
    fn on_change(&self, handler: ChangeHandler) -> Subscription;
}

/// Performs a full page load of the given URL.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Keeps a change handler registered; dropping it unregisters the handler.
#[must_use = "dropping a subscription unregisters its handler"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

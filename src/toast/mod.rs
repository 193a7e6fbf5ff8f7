//! Transient alert notifications.
//!
//! [`show_alert`] appends an element with classes `alert alert-<level>` to an
//! [`AlertHost`], toggles `show` on and off on a fixed timeline and removes the
//! element afterwards. Every call runs its own timeline; host failures are
//! logged and never reach the caller.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use crate::domain::types::TypeConstraintError;

pub mod memory;

/// Class toggled on while the alert is visible.
pub const SHOW_CLASS: &str = "show";

/// Severity of an alert, rendered as the `alert-<level>` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub fn class(self) -> String {
        format!("alert-{}", self.as_str())
    }
}

impl Display for AlertLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertLevel {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "info" | "debug" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "danger" | "error" => Ok(Self::Danger),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown alert level `{other}`"
            ))),
        }
    }
}

/// Identifier of an element attached to an [`AlertHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl Display for ElementId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("element {0} is not attached")]
    Detached(ElementId),
    #[error("alert host unavailable: {0}")]
    Unavailable(String),
}

/// Document surface alerts are rendered into.
pub trait AlertHost: Send + Sync {
    /// Appends a new element to the document body.
    fn append(&self, classes: &[String], text: &str) -> Result<ElementId, HostError>;
    fn add_class(&self, id: ElementId, class: &str) -> Result<(), HostError>;
    fn remove_class(&self, id: ElementId, class: &str) -> Result<(), HostError>;
    fn remove(&self, id: ElementId) -> Result<(), HostError>;
}

/// Delays of the alert timeline, all measured from the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    /// When `show` is added.
    pub show_after: Duration,
    /// When `show` is removed again.
    pub hide_after: Duration,
    /// Time between hiding and removing the element.
    pub fade_out: Duration,
}

impl ToastTimings {
    /// Time after which the element is gone from the document.
    pub fn total(&self) -> Duration {
        self.hide_after.max(self.show_after) + self.fade_out
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            show_after: Duration::from_millis(100),
            hide_after: Duration::from_millis(3000),
            fade_out: Duration::from_millis(500),
        }
    }
}

/// A running alert timeline.
#[derive(Debug)]
pub struct Toast {
    element: Option<ElementId>,
    timeline: Option<JoinHandle<()>>,
}

impl Toast {
    /// Element created for this alert, `None` if the host refused it.
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// Waits until the element has been removed.
    pub async fn finished(self) {
        if let Some(timeline) = self.timeline {
            if let Err(err) = timeline.await {
                warn!("Alert timeline aborted: {err}");
            }
        }
    }
}

/// Shows `message` with the default timings. Outside a tokio runtime nothing
/// is attached and the returned [`Toast`] has no element.
pub fn show_alert(host: Arc<dyn AlertHost>, message: &str, level: AlertLevel) -> Toast {
    show_alert_with(host, message, level, ToastTimings::default())
}

pub fn show_alert_with(
    host: Arc<dyn AlertHost>,
    message: &str,
    level: AlertLevel,
    timings: ToastTimings,
) -> Toast {
    debug!("Showing {level} alert: {message}");
    let runtime = match Handle::try_current() {
        Ok(runtime) => runtime,
        Err(err) => {
            warn!("Cannot schedule alert without a runtime: {err}");
            return Toast {
                element: None,
                timeline: None,
            };
        }
    };
    let started = Instant::now();

    let classes = ["alert".to_string(), level.class()];
    let id = match host.append(&classes, message) {
        Ok(id) => id,
        Err(err) => {
            warn!("Failed to attach alert: {err}");
            return Toast {
                element: None,
                timeline: None,
            };
        }
    };

    let timeline = runtime.spawn(async move {
        sleep_until(started + timings.show_after).await;
        if let Err(err) = host.add_class(id, SHOW_CLASS) {
            warn!("Failed to show alert {id}: {err}");
        }

        sleep_until(started + timings.hide_after.max(timings.show_after)).await;
        if let Err(err) = host.remove_class(id, SHOW_CLASS) {
            warn!("Failed to hide alert {id}: {err}");
        }

        sleep_until(started + timings.total()).await;
        match host.remove(id) {
            Ok(()) => debug!("Alert {id} removed"),
            Err(err) => warn!("Failed to remove alert {id}: {err}"),
        }
    });

    Toast {
        element: Some(id),
        timeline: Some(timeline),
    }
}

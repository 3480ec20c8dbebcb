//! User-facing notifications and two sinks for them.

use std::cell::RefCell;

use serde::Serialize;

use crate::error::PlannerError;
use crate::location::Location;
use crate::traits::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    pub fn waypoint_added(waypoint: &Location) -> Self {
        Self::info(
            format!("{} selected", waypoint.name),
            format!(
                "Latitude: {}, Longitude: {}",
                waypoint.latitude, waypoint.longitude
            ),
        )
    }

    pub fn map_reset() -> Self {
        Self::info("Map reset", "Select new waypoints.")
    }

    /// The one notification a given failure produces.
    pub fn from_error(error: &PlannerError) -> Self {
        match error {
            PlannerError::OutOfBounds { region, .. } => Self::error(
                format!("Out of {}", region),
                format!("Currently this project works only for {} state.", region),
            ),
            PlannerError::InsufficientWaypoints(_) => Self::error(
                "Insufficient points",
                "Please select at least two points on the map.",
            ),
            PlannerError::SegmentUnreachable { from, to } => Self::error(
                format!("No path found between points {} and {}", from, to),
                "Please try different locations.",
            ),
            PlannerError::InvalidSegmentData { .. } => {
                Self::error("Invalid path data", "The path data is invalid.")
            }
            PlannerError::TransportFailure(_) => Self::error(
                "Error finding path",
                "Failed to retrieve path. Please try again.",
            ),
            PlannerError::OverlayHopFailure { hop, .. } => Self::error(
                "Routing Error",
                format!("Failed to fetch route for segment {}", hop),
            ),
        }
    }
}

/// Forwards notifications to `tracing`, for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => {
                tracing::info!(title = %notification.title, "{}", notification.description)
            }
            Severity::Error => {
                tracing::warn!(title = %notification.title, "{}", notification.description)
            }
        }
    }
}

/// Queues notifications so a host can drain and present them later.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    queue: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Copy of everything queued so far, oldest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue.borrow().clone()
    }

    /// Takes everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Number of queued notifications with the given title prefix.
    pub fn count_titled(&self, prefix: &str) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|n| n.title.starts_with(prefix))
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.queue.borrow_mut().push(notification);
    }
}

//! Collaborator seams for the planner core.
//!
//! The core never talks to a concrete map, toast system or HTTP stack
//! directly. Hosts plug in implementations of these traits; the crate ships
//! HTTP adapters (`path_service`, `osrm`) and in-memory ones (`viewport`,
//! `notify`).

use crate::error::TransportError;
use crate::location::Location;
use crate::notify::Notification;
use crate::path_service::SegmentResponse;
use crate::polyline::{Bounds, Polyline};
use crate::viewport::LayerId;

/// Resolves the path between two waypoints (one segment).
///
/// `Err` means the service could not be reached or answered non-2xx. A
/// successful answer with an empty path is still `Ok`.
pub trait PathFinder {
    fn find_segment(&self, start: &Location, end: &Location) -> Result<SegmentResponse, TransportError>;
}

impl<P: PathFinder + ?Sized> PathFinder for &P {
    fn find_segment(&self, start: &Location, end: &Location) -> Result<SegmentResponse, TransportError> {
        (**self).find_segment(start, end)
    }
}

/// Provides road-snapped geometry for one hop.
///
/// `Ok(None)` means the service answered but had no route for the hop.
pub trait RouteGeometryProvider {
    fn route_geometry(&self, from: &Location, to: &Location) -> Result<Option<Polyline>, TransportError>;
}

impl<G: RouteGeometryProvider + ?Sized> RouteGeometryProvider for &G {
    fn route_geometry(&self, from: &Location, to: &Location) -> Result<Option<Polyline>, TransportError> {
        (**self).route_geometry(from, to)
    }
}

/// Command surface of the hosting map.
pub trait MapViewport {
    fn add_marker(&mut self, position: (f64, f64)) -> LayerId;

    fn add_polyline(&mut self, polyline: &Polyline) -> LayerId;

    /// Removes a marker or polyline. Unknown ids are ignored.
    fn remove_layer(&mut self, layer: LayerId);

    /// Fits the view to `bounds`, keeping `padding` pixels (x, y) around it.
    fn fit_bounds(&mut self, bounds: &Bounds, padding: (u32, u32));
}

/// Receives user-facing notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

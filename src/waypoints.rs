//! Ordered waypoint store, kept in lockstep with its map markers.

use tracing::{debug, info};

use crate::error::PlannerError;
use crate::geofence::Geofence;
use crate::location::Location;
use crate::notify::Notification;
use crate::traits::{MapViewport, Notifier};
use crate::viewport::LayerId;

/// Waypoints in click order. Each entry owns exactly one marker, so the
/// waypoint count and marker count cannot drift apart.
#[derive(Debug, Clone)]
pub struct WaypointStore {
    geofence: Geofence,
    entries: Vec<(Location, LayerId)>,
}

impl WaypointStore {
    pub fn new(geofence: Geofence) -> Self {
        Self {
            geofence,
            entries: Vec::new(),
        }
    }

    /// Admits a picked point, adding its marker and confirming to the user.
    ///
    /// Points outside the geofence leave the store untouched and produce a
    /// single `OutOfBounds` notification.
    pub fn add<V, N>(&mut self, point: (f64, f64), viewport: &mut V, notifier: &N) -> Result<&Location, PlannerError>
    where
        V: MapViewport,
        N: Notifier,
    {
        if !self.geofence.contains(point) {
            let err = PlannerError::OutOfBounds {
                region: self.geofence.region.clone(),
                latitude: point.0,
                longitude: point.1,
            };
            debug!(lat = point.0, lng = point.1, "rejected waypoint outside geofence");
            notifier.notify(Notification::from_error(&err));
            return Err(err);
        }

        let waypoint = Location::waypoint(point);
        let marker = viewport.add_marker(point);
        notifier.notify(Notification::waypoint_added(&waypoint));
        info!(index = self.entries.len(), lat = point.0, lng = point.1, "waypoint added");

        self.entries.push((waypoint, marker));
        Ok(&self.entries[self.entries.len() - 1].0)
    }

    /// Drops every waypoint together with its marker.
    pub fn reset<V: MapViewport>(&mut self, viewport: &mut V) {
        for (_, marker) in self.entries.drain(..) {
            viewport.remove_layer(marker);
        }
    }

    pub fn list(&self) -> Vec<Location> {
        self.entries.iter().map(|(location, _)| location.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter().map(|(location, _)| location)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn geofence(&self) -> &Geofence {
        &self.geofence
    }
}

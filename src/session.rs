//! One map session: waypoints, path finding, overlay, reset.

use tracing::info;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::location::{Location, StitchedPath};
use crate::notify::Notification;
use crate::orchestrator::PathOrchestrator;
use crate::overlay::{RenderSummary, RouteOverlay};
use crate::traits::{MapViewport, Notifier, PathFinder, RouteGeometryProvider};
use crate::viewport::MapEvent;
use crate::waypoints::WaypointStore;

/// Owns all transient state for one mounted map.
///
/// The viewport is only a command sink here; the session decides what goes
/// on it and keeps its own record of what it put there.
pub struct RoutingSession<P, G, V, N> {
    waypoints: WaypointStore,
    overlay: RouteOverlay,
    orchestrator: PathOrchestrator<P>,
    geometry: G,
    viewport: V,
    notifier: N,
    last_result: Option<StitchedPath>,
    last_render: Option<RenderSummary>,
}

impl<P, G, V, N> RoutingSession<P, G, V, N>
where
    P: PathFinder,
    G: RouteGeometryProvider,
    V: MapViewport,
    N: Notifier,
{
    pub fn new(config: &PlannerConfig, finder: P, geometry: G, viewport: V, notifier: N) -> Self {
        Self {
            waypoints: WaypointStore::new(config.geofence.clone()),
            overlay: RouteOverlay::new(config.fit_padding),
            orchestrator: PathOrchestrator::new(finder, config.stitch_policy),
            geometry,
            viewport,
            notifier,
            last_result: None,
            last_render: None,
        }
    }

    pub fn handle_event(&mut self, event: MapEvent) -> Result<(), PlannerError> {
        match event {
            MapEvent::Click(point) => self.add_waypoint(point).map(|_| ()),
        }
    }

    pub fn add_waypoint(&mut self, point: (f64, f64)) -> Result<&Location, PlannerError> {
        self.waypoints.add(point, &mut self.viewport, &self.notifier)
    }

    /// Stitches a path through the current waypoints and draws it.
    ///
    /// Whatever the previous run produced is discarded first. On a fatal
    /// error the overlay is left empty and no result is kept.
    pub fn find_path(&mut self) -> Result<StitchedPath, PlannerError> {
        self.last_result = None;
        self.last_render = None;

        let waypoints = self.waypoints.list();
        if waypoints.len() >= 2 {
            self.overlay.clear(&mut self.viewport);
        }

        let stitched = self.orchestrator.find_path(&waypoints, &self.notifier)?;
        let summary = self
            .overlay
            .render(&stitched, &self.geometry, &mut self.viewport, &self.notifier);

        self.last_render = Some(summary);
        self.last_result = Some(stitched.clone());
        Ok(stitched)
    }

    /// Clears waypoints, markers and the overlay. Always succeeds.
    pub fn reset(&mut self) {
        self.waypoints.reset(&mut self.viewport);
        self.overlay.clear(&mut self.viewport);
        self.last_result = None;
        self.last_render = None;
        self.notifier.notify(Notification::map_reset());
        info!("session reset");
    }

    pub fn waypoints(&self) -> &WaypointStore {
        &self.waypoints
    }

    pub fn overlay(&self) -> &RouteOverlay {
        &self.overlay
    }

    /// The most recent stitched path, if the last find-path run succeeded.
    pub fn last_result(&self) -> Option<&StitchedPath> {
        self.last_result.as_ref()
    }

    pub fn last_render(&self) -> Option<RenderSummary> {
        self.last_render
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn finder(&self) -> &P {
        self.orchestrator.finder()
    }
}

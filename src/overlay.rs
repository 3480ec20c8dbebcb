//! Road-snapped route overlay.
//!
//! The overlay owns the polylines it puts on the map and the bounding box of
//! everything it drew. Every render starts from a clean map, so polylines from
//! an earlier path never survive into the next one.

use tracing::{debug, info, warn};

use crate::error::PlannerError;
use crate::location::StitchedPath;
use crate::notify::Notification;
use crate::polyline::Bounds;
use crate::traits::{MapViewport, Notifier, RouteGeometryProvider};
use crate::viewport::LayerId;

/// Per-render hop tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub drawn: usize,
    /// Hops the routing service answered without a route.
    pub empty: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy)]
enum HopOutcome {
    Drawn,
    NoGeometry,
    Failed,
}

#[derive(Debug, Clone)]
pub struct RouteOverlay {
    polylines: Vec<LayerId>,
    bounds: Bounds,
    padding: (u32, u32),
}

impl RouteOverlay {
    pub fn new(padding: (u32, u32)) -> Self {
        Self {
            polylines: Vec::new(),
            bounds: Bounds::empty(),
            padding,
        }
    }

    /// Removes every polyline this overlay drew.
    pub fn clear<V: MapViewport>(&mut self, viewport: &mut V) {
        for layer in self.polylines.drain(..) {
            viewport.remove_layer(layer);
        }
        self.bounds = Bounds::empty();
    }

    /// Redraws the overlay for `path`, one hop at a time.
    ///
    /// A hop whose geometry request fails is reported and left out; the
    /// remaining hops are still drawn and the view is fitted to whatever was.
    pub fn render<G, V, N>(&mut self, path: &StitchedPath, geometry: &G, viewport: &mut V, notifier: &N) -> RenderSummary
    where
        G: RouteGeometryProvider,
        V: MapViewport,
        N: Notifier,
    {
        self.clear(viewport);

        let mut summary = RenderSummary::default();
        if path.len() < 2 {
            return summary;
        }

        for (index, hop) in path.path.windows(2).enumerate() {
            let outcome = match geometry.route_geometry(&hop[0], &hop[1]) {
                Ok(Some(polyline)) => {
                    self.bounds.extend_polyline(&polyline);
                    self.polylines.push(viewport.add_polyline(&polyline));
                    HopOutcome::Drawn
                }
                Ok(None) => HopOutcome::NoGeometry,
                Err(source) => {
                    let err = PlannerError::OverlayHopFailure { hop: index + 1, source };
                    warn!("{}", err);
                    notifier.notify(Notification::from_error(&err));
                    HopOutcome::Failed
                }
            };

            match outcome {
                HopOutcome::Drawn => summary.drawn += 1,
                HopOutcome::NoGeometry => {
                    debug!(hop = index + 1, "routing service returned no route");
                    summary.empty += 1;
                }
                HopOutcome::Failed => summary.failed += 1,
            }
        }

        if self.bounds.is_valid() {
            viewport.fit_bounds(&self.bounds, self.padding);
        }

        info!(
            drawn = summary.drawn,
            empty = summary.empty,
            failed = summary.failed,
            "route overlay rendered"
        );
        summary
    }

    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    /// Box around everything drawn by the last render; invalid if nothing was.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

impl Default for RouteOverlay {
    fn default() -> Self {
        Self::new((30, 30))
    }
}

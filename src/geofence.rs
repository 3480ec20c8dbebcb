//! Fixed rectangular region that waypoint picks must fall inside.

use crate::polyline::Bounds;

/// Approximate Gujarat state box, south-west corner (lat, lng).
pub const GUJARAT_SOUTH_WEST: (f64, f64) = (20.14, 68.37);

/// Approximate Gujarat state box, north-east corner (lat, lng).
pub const GUJARAT_NORTH_EAST: (f64, f64) = (24.70, 74.47);

#[derive(Debug, Clone, PartialEq)]
pub struct Geofence {
    /// Human-readable region name used in rejection messages.
    pub region: String,
    bounds: Bounds,
}

impl Geofence {
    pub fn new(region: impl Into<String>, south_west: (f64, f64), north_east: (f64, f64)) -> Self {
        Self {
            region: region.into(),
            bounds: Bounds::new(south_west, north_east),
        }
    }

    pub fn gujarat() -> Self {
        Self::new("Gujarat", GUJARAT_SOUTH_WEST, GUJARAT_NORTH_EAST)
    }

    pub fn contains(&self, point: (f64, f64)) -> bool {
        self.bounds.contains(point)
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

impl Default for Geofence {
    fn default() -> Self {
        Self::gujarat()
    }
}

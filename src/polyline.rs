//! Polyline and bounding-box types for route geometries.
//!
//! Routing services hand out GeoJSON coordinates as `[longitude, latitude]`
//! pairs; the map works in (latitude, longitude). The swap happens once, when
//! the polyline is built, and everything downstream sees map order.

use serde::{Deserialize, Serialize};

/// A polyline representing a road-snapped hop as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Builds a polyline from GeoJSON `[longitude, latitude]` pairs.
    pub fn from_lng_lat(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates.iter().map(|[lng, lat]| (*lat, *lng)).collect(),
        }
    }

    /// Returns a reference to the (latitude, longitude) points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Axis-aligned latitude/longitude box.
///
/// Starts out empty (invalid) and grows as points are added, the same way a
/// map library's `LatLngBounds` does. Containment is inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Box spanning the south-west and north-east corners.
    pub fn new(south_west: (f64, f64), north_east: (f64, f64)) -> Self {
        Self {
            min_lat: south_west.0,
            min_lng: south_west.1,
            max_lat: north_east.0,
            max_lng: north_east.1,
        }
    }

    /// A box that contains nothing yet.
    pub fn empty() -> Self {
        Self {
            min_lat: f64::INFINITY,
            min_lng: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            max_lng: f64::NEG_INFINITY,
        }
    }

    /// True once at least one point has been added.
    pub fn is_valid(&self) -> bool {
        self.min_lat <= self.max_lat && self.min_lng <= self.max_lng
    }

    pub fn extend(&mut self, (lat, lng): (f64, f64)) {
        self.min_lat = self.min_lat.min(lat);
        self.min_lng = self.min_lng.min(lng);
        self.max_lat = self.max_lat.max(lat);
        self.max_lng = self.max_lng.max(lng);
    }

    pub fn extend_polyline(&mut self, polyline: &Polyline) {
        for point in polyline.points() {
            self.extend(*point);
        }
    }

    pub fn contains(&self, (lat, lng): (f64, f64)) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    pub fn south_west(&self) -> (f64, f64) {
        (self.min_lat, self.min_lng)
    }

    pub fn north_east(&self) -> (f64, f64) {
        (self.max_lat, self.max_lng)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

//! Point and path types shared by the waypoint store, orchestrator and overlay.

use serde::{Deserialize, Serialize};

/// Placeholder name given to every user-picked waypoint.
pub const WAYPOINT_NAME: &str = "Waypoint";

/// A named geographic point: a picked waypoint or a node returned by the
/// pathfinding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Creates a user waypoint at `(lat, lng)` with the generic placeholder name.
    pub fn waypoint(position: (f64, f64)) -> Self {
        Self::new(WAYPOINT_NAME, position.0, position.1)
    }

    /// Position as a (latitude, longitude) tuple.
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// True when both points sit on exactly the same coordinate, ignoring names.
    pub fn same_position(&self, other: &Location) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

/// One pairwise pathfinding result after null-field filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegmentResult {
    pub path: Vec<Location>,
    pub total_cost: f64,
}

/// Concatenation of every contributing segment with boundary duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StitchedPath {
    pub path: Vec<Location>,
    pub total_cost: f64,
}

impl StitchedPath {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_uses_placeholder_name() {
        let waypoint = Location::waypoint((22.0, 71.0));
        assert_eq!(waypoint.name, WAYPOINT_NAME);
        assert_eq!(waypoint.position(), (22.0, 71.0));
    }

    #[test]
    fn test_same_position_ignores_name() {
        let a = Location::new("Ahmedabad", 23.0225, 72.5714);
        let b = Location::new("Node 17", 23.0225, 72.5714);
        assert!(a.same_position(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_stitched_path_serializes_camel_case() {
        let stitched = StitchedPath {
            path: vec![Location::new("A", 22.0, 71.0)],
            total_cost: 5000.0,
        };
        let json = serde_json::to_string(&stitched).unwrap();
        assert!(json.contains("\"totalCost\":5000.0"), "got {}", json);
    }
}

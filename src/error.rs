//! Error taxonomy for waypoint admission, path stitching and overlay rendering.

use thiserror::Error;

/// Failure talking to one of the remote services.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Map click outside the geofence; nothing was stored.
    #[error("({latitude}, {longitude}) is outside {region}")]
    OutOfBounds {
        region: String,
        latitude: f64,
        longitude: f64,
    },
    /// Fewer than two waypoints at find-path time.
    #[error("at least two waypoints are required, got {0}")]
    InsufficientWaypoints(usize),
    /// The service answered but had no path for this pair. Non-fatal.
    #[error("no path found between points {from} and {to}")]
    SegmentUnreachable { from: usize, to: usize },
    /// Segment data unusable for stitching. Fatal.
    #[error("invalid path data for segment {segment}: {reason}")]
    InvalidSegmentData { segment: usize, reason: String },
    /// Pathfinding request failed. Fatal.
    #[error("failed to retrieve path: {0}")]
    TransportFailure(#[source] TransportError),
    /// Routing geometry for one hop could not be fetched. Non-fatal.
    #[error("failed to fetch route for segment {hop}: {source}")]
    OverlayHopFailure {
        hop: usize,
        #[source]
        source: TransportError,
    },
}

impl PlannerError {
    /// Fatal errors abort the whole find-path run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PlannerError::InsufficientWaypoints(_)
                | PlannerError::InvalidSegmentData { .. }
                | PlannerError::TransportFailure(_)
        )
    }
}

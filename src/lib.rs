//! waypoint-planner core
//!
//! Turns an ordered list of map waypoints into one stitched path by asking a
//! pathfinding service for each consecutive pair, then overlays road-snapped
//! geometry from an OSRM-compatible routing service.

pub mod config;
pub mod details;
pub mod error;
pub mod geofence;
pub mod location;
pub mod notify;
pub mod orchestrator;
pub mod osrm;
pub mod overlay;
pub mod path_service;
pub mod polyline;
pub mod session;
pub mod traits;
pub mod viewport;
pub mod waypoints;

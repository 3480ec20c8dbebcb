//! Test fixtures for waypoint-planner.
//!
//! Provides:
//! - Real Gujarat city locations (from OpenStreetMap)
//! - Scripted mock services for the pathfinding and routing seams

#![allow(dead_code)]

pub mod gujarat_locations;
pub mod mocks;

pub use gujarat_locations::*;
pub use mocks::*;

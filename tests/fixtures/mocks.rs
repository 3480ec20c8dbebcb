//! Scripted stand-ins for the remote services.

use std::cell::RefCell;
use std::collections::VecDeque;

use waypoint_planner::error::TransportError;
use waypoint_planner::location::Location;
use waypoint_planner::path_service::SegmentResponse;
use waypoint_planner::polyline::Polyline;
use waypoint_planner::traits::{PathFinder, RouteGeometryProvider};

/// Answers find-path requests from a queue, recording every request.
#[derive(Debug, Default)]
pub struct MockFinder {
    responses: RefCell<VecDeque<Result<SegmentResponse, TransportError>>>,
    calls: RefCell<Vec<(Location, Location)>>,
}

impl MockFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment(self, path: Vec<Location>, total_cost: f64) -> Self {
        self.with_response(Ok(SegmentResponse::new(path, total_cost)))
    }

    pub fn with_response(self, response: Result<SegmentResponse, TransportError>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn with_transport_failure(self) -> Self {
        self.with_response(Err(TransportError::Status(500)))
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<(Location, Location)> {
        self.calls.borrow().clone()
    }
}

impl PathFinder for MockFinder {
    fn find_segment(&self, start: &Location, end: &Location) -> Result<SegmentResponse, TransportError> {
        self.calls.borrow_mut().push((start.clone(), end.clone()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unavailable("no scripted response".to_string())))
    }
}

/// Scripted answer for one routing hop.
#[derive(Debug)]
pub enum HopAnswer {
    /// Two-point line from hop start to hop end.
    Straight,
    Scripted(Result<Option<Polyline>, TransportError>),
}

/// Answers routing requests hop by hop; hops past the script get straight lines.
#[derive(Debug, Default)]
pub struct MockGeometry {
    script: RefCell<VecDeque<HopAnswer>>,
    calls: RefCell<usize>,
}

impl MockGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, answer: HopAnswer) -> Self {
        self.script.borrow_mut().push_back(answer);
        self
    }

    pub fn then_straight(self) -> Self {
        self.then(HopAnswer::Straight)
    }

    pub fn then_fail(self) -> Self {
        self.then(HopAnswer::Scripted(Err(TransportError::Unavailable(
            "connection reset".to_string(),
        ))))
    }

    pub fn then_no_route(self) -> Self {
        self.then(HopAnswer::Scripted(Ok(None)))
    }

    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }
}

impl RouteGeometryProvider for MockGeometry {
    fn route_geometry(&self, from: &Location, to: &Location) -> Result<Option<Polyline>, TransportError> {
        *self.calls.borrow_mut() += 1;
        match self.script.borrow_mut().pop_front() {
            Some(HopAnswer::Scripted(answer)) => answer,
            Some(HopAnswer::Straight) | None => {
                Ok(Some(Polyline::new(vec![from.position(), to.position()])))
            }
        }
    }
}

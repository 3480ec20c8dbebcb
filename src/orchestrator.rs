//! Pairwise path fetching and stitching.
//!
//! Each consecutive waypoint pair becomes one request to the pathfinding
//! service. Requests run strictly one after another; every response is
//! classified into a [`SegmentOutcome`] before the next request is sent, so
//! the running path and cost only ever see segments in waypoint order.
//!
//! Failure handling differs by kind:
//! - transport failures and segments that filter down to nothing abort the
//!   whole run;
//! - a pair with no path is skipped, reported, and contributes no nodes and
//!   no cost.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::error::PlannerError;
use crate::location::{Location, PathSegmentResult, StitchedPath};
use crate::notify::Notification;
use crate::path_service::RawNode;
use crate::traits::{Notifier, PathFinder};

/// How segment boundaries are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StitchPolicy {
    /// Drop the first node of every later segment without checking it.
    #[default]
    BestEffort,
    /// Drop the first node of a later segment only if it sits on the running
    /// path's last node; otherwise the run fails with `InvalidSegmentData`.
    Strict,
}

impl FromStr for StitchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best-effort" | "best_effort" => Ok(StitchPolicy::BestEffort),
            "strict" => Ok(StitchPolicy::Strict),
            other => Err(format!("unknown stitch policy '{}'", other)),
        }
    }
}

impl fmt::Display for StitchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StitchPolicy::BestEffort => write!(f, "best-effort"),
            StitchPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Running concatenation of contributing segments.
#[derive(Debug, Clone)]
pub struct Stitcher {
    policy: StitchPolicy,
    path: Vec<Location>,
    total_cost: f64,
    contributed: usize,
}

impl Stitcher {
    pub fn new(policy: StitchPolicy) -> Self {
        Self {
            policy,
            path: Vec::new(),
            total_cost: 0.0,
            contributed: 0,
        }
    }

    /// Appends a filtered segment. `segment_number` is 1-based and only used
    /// for error reporting.
    pub fn push(&mut self, segment_number: usize, segment: PathSegmentResult) -> Result<(), PlannerError> {
        if self.contributed == 0 {
            self.path = segment.path;
        } else {
            if self.policy == StitchPolicy::Strict {
                let joined = match (self.path.last(), segment.path.first()) {
                    (Some(last), Some(first)) => last.same_position(first),
                    _ => false,
                };
                if !joined {
                    return Err(PlannerError::InvalidSegmentData {
                        segment: segment_number,
                        reason: "segment does not start where the previous one ended".to_string(),
                    });
                }
            }
            self.path.extend(segment.path.into_iter().skip(1));
        }

        self.total_cost += segment.total_cost;
        self.contributed += 1;
        Ok(())
    }

    /// Number of segments merged so far.
    pub fn contributed(&self) -> usize {
        self.contributed
    }

    pub fn finish(self) -> StitchedPath {
        StitchedPath {
            path: self.path,
            total_cost: self.total_cost,
        }
    }
}

/// What one pathfinding response means for the stitch.
#[derive(Debug)]
enum SegmentOutcome {
    Contribute(PathSegmentResult),
    Skip(PlannerError),
}

pub struct PathOrchestrator<P> {
    finder: P,
    policy: StitchPolicy,
}

impl<P: PathFinder> PathOrchestrator<P> {
    pub fn new(finder: P, policy: StitchPolicy) -> Self {
        Self { finder, policy }
    }

    pub fn finder(&self) -> &P {
        &self.finder
    }

    pub fn policy(&self) -> StitchPolicy {
        self.policy
    }

    /// Resolves every consecutive waypoint pair and stitches the results.
    ///
    /// Skipped segments are reported as they happen. A fatal error is
    /// reported once, here, and returned.
    pub fn find_path<N: Notifier>(&self, waypoints: &[Location], notifier: &N) -> Result<StitchedPath, PlannerError> {
        match self.stitch(waypoints, notifier) {
            Ok(stitched) => {
                info!(
                    nodes = stitched.len(),
                    total_cost = stitched.total_cost,
                    "stitched path"
                );
                Ok(stitched)
            }
            Err(err) => {
                warn!(error = %err, "find path aborted");
                notifier.notify(Notification::from_error(&err));
                Err(err)
            }
        }
    }

    fn stitch<N: Notifier>(&self, waypoints: &[Location], notifier: &N) -> Result<StitchedPath, PlannerError> {
        if waypoints.len() < 2 {
            return Err(PlannerError::InsufficientWaypoints(waypoints.len()));
        }

        let mut stitcher = Stitcher::new(self.policy);
        for (index, pair) in waypoints.windows(2).enumerate() {
            match self.fetch_segment(index, &pair[0], &pair[1])? {
                SegmentOutcome::Contribute(segment) => {
                    debug!(segment = index + 1, nodes = segment.path.len(), cost = segment.total_cost, "segment found");
                    stitcher.push(index + 1, segment)?;
                }
                SegmentOutcome::Skip(err) => {
                    warn!(segment = index + 1, "{}", err);
                    notifier.notify(Notification::from_error(&err));
                }
            }
        }

        Ok(stitcher.finish())
    }

    fn fetch_segment(&self, index: usize, start: &Location, end: &Location) -> Result<SegmentOutcome, PlannerError> {
        let response = self
            .finder
            .find_segment(start, end)
            .map_err(PlannerError::TransportFailure)?;

        if response.has_no_path() {
            return Ok(SegmentOutcome::Skip(PlannerError::SegmentUnreachable {
                from: index + 1,
                to: index + 2,
            }));
        }

        let total_cost = response.total_cost.unwrap_or(0.0);
        let path: Vec<Location> = response
            .path
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawNode::into_location)
            .collect();

        if path.is_empty() {
            return Err(PlannerError::InvalidSegmentData {
                segment: index + 1,
                reason: "every node has a null field".to_string(),
            });
        }

        Ok(SegmentOutcome::Contribute(PathSegmentResult { path, total_cost }))
    }
}

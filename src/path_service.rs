//! HTTP adapter for the remote pathfinding service.
//!
//! `GET {base}/api/find-path?start=<lat>,<lng>&end=<lat>,<lng>` answers with
//! `{ "path": [{name, latitude, longitude}, ...], "totalCost": n }`. Any field
//! of a node may come back null, so the wire types keep everything optional
//! and the orchestrator decides what survives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PathServiceConfig;
use crate::error::TransportError;
use crate::location::Location;
use crate::traits::PathFinder;

/// A path node as sent by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RawNode {
    /// The node as a `Location`, or `None` if any field is null.
    pub fn into_location(self) -> Option<Location> {
        Some(Location {
            name: self.name?,
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }
}

impl From<Location> for RawNode {
    fn from(location: Location) -> Self {
        Self {
            name: Some(location.name),
            latitude: Some(location.latitude),
            longitude: Some(location.longitude),
        }
    }
}

/// Body of a successful find-path response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResponse {
    #[serde(default)]
    pub path: Option<Vec<RawNode>>,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

impl SegmentResponse {
    pub fn new(path: Vec<Location>, total_cost: f64) -> Self {
        Self {
            path: Some(path.into_iter().map(RawNode::from).collect()),
            total_cost: Some(total_cost),
        }
    }

    /// A response carrying no path at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the service found nothing for this pair.
    pub fn has_no_path(&self) -> bool {
        self.path.as_ref().is_none_or(|path| path.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct PathServiceClient {
    config: PathServiceConfig,
    client: reqwest::blocking::Client,
}

impl PathServiceClient {
    pub fn new(config: PathServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn segment_url(&self, start: &Location, end: &Location) -> String {
        format!(
            "{}/api/find-path?start={},{}&end={},{}",
            self.config.base_url, start.latitude, start.longitude, end.latitude, end.longitude
        )
    }
}

impl PathFinder for PathServiceClient {
    fn find_segment(&self, start: &Location, end: &Location) -> Result<SegmentResponse, TransportError> {
        let url = self.segment_url(start, end);
        debug!(%url, "requesting path segment");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.json::<SegmentResponse>()?)
    }
}

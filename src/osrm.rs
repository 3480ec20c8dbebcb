//! OSRM HTTP adapter for road-snapped hop geometry.

use serde::Deserialize;
use tracing::debug;

use crate::config::OsrmConfig;
use crate::error::TransportError;
use crate::location::Location;
use crate::polyline::Polyline;
use crate::traits::RouteGeometryProvider;

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, from: &Location, to: &Location) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.config.base_url,
            self.config.profile,
            from.longitude,
            from.latitude,
            to.longitude,
            to.latitude
        )
    }
}

impl RouteGeometryProvider for OsrmClient {
    fn route_geometry(&self, from: &Location, to: &Location) -> Result<Option<Polyline>, TransportError> {
        let url = self.route_url(from, to);
        debug!(%url, "requesting route geometry");

        // OSRM reports NoRoute as a 400 with a JSON body, so the status is
        // not checked; an unparseable body is the failure signal.
        let body = self.client.get(url).send()?.json::<OsrmRouteResponse>()?;

        Ok(body
            .routes
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|route| Polyline::from_lng_lat(&route.geometry.coordinates)))
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    routes: Option<Vec<OsrmRoute>>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

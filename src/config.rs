//! Runtime configuration for the service adapters and the session.

use crate::geofence::Geofence;
use crate::orchestrator::StitchPolicy;

#[derive(Debug, Clone)]
pub struct PathServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for PathServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub path_service: PathServiceConfig,
    pub osrm: OsrmConfig,
    pub geofence: Geofence,
    pub stitch_policy: StitchPolicy,
    /// Pixel padding (x, y) kept around the route when fitting the view.
    pub fit_padding: (u32, u32),
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            path_service: PathServiceConfig::default(),
            osrm: OsrmConfig::default(),
            geofence: Geofence::gujarat(),
            stitch_policy: StitchPolicy::default(),
            fit_padding: (30, 30),
        }
    }
}

impl PlannerConfig {
    /// Defaults overridden by `PATH_API_BASE_URL`, `OSRM_BASE_URL`,
    /// `OSRM_PROFILE` and `STITCH_POLICY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PATH_API_BASE_URL") {
            config.path_service.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("OSRM_BASE_URL") {
            config.osrm.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(profile) = lookup("OSRM_PROFILE") {
            config.osrm.profile = profile;
        }
        if let Some(policy) = lookup("STITCH_POLICY") {
            match policy.parse() {
                Ok(policy) => config.stitch_policy = policy,
                Err(err) => tracing::warn!("ignoring STITCH_POLICY: {}", err),
            }
        }

        config
    }
}

use crate::{Coordinates, RadiusTier};

/// Runtime configuration for a spin, assembled from the environment.
///
/// See [`crate::config::load_app_config`] for the variables and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    /// Overpass interpreter URLs, tried in order.
    pub endpoints: Vec<String>,
    /// Search radii, largest first.
    pub radius_tiers: Vec<RadiusTier>,
    /// Server-side cap on returned elements.
    pub result_limit: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Base delay before each fallback attempt; `0` disables the pause.
    pub retry_backoff_ms: u64,
    /// Preset position used when no coordinates are passed on the command line.
    pub fixed_location: Option<Coordinates>,
}

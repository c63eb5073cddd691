use crate::app_config::AppConfig;
use crate::radius::{parse_radius_tiers, DEFAULT_RADIUS_TIERS};
use crate::{ConfigError, Coordinates};

pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "https://overpass-api.de/api/interpreter",
    "https://overpass.kumi.systems/api/interpreter",
];

pub const DEFAULT_RESULT_LIMIT: u32 = 50;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can feed a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str| -> Result<Option<f64>, ConfigError> {
        lookup(var)
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        var: var.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()
    };

    let log_level = or_default("LUNCHOMATIC_LOG_LEVEL", DEFAULT_LOG_LEVEL);

    let endpoints = match lookup("LUNCHOMATIC_ENDPOINTS") {
        Ok(raw) => parse_endpoints(&raw)?,
        Err(_) => DEFAULT_ENDPOINTS.iter().map(|s| (*s).to_string()).collect(),
    };

    let radius_tiers = match lookup("LUNCHOMATIC_RADIUS_TIERS") {
        Ok(raw) => parse_radius_tiers("LUNCHOMATIC_RADIUS_TIERS", &raw)?,
        Err(_) => DEFAULT_RADIUS_TIERS.to_vec(),
    };

    let result_limit = parse_u32(
        "LUNCHOMATIC_RESULT_LIMIT",
        &DEFAULT_RESULT_LIMIT.to_string(),
    )?;
    if result_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LUNCHOMATIC_RESULT_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("LUNCHOMATIC_REQUEST_TIMEOUT_SECS", "60")?;
    let user_agent = or_default(
        "LUNCHOMATIC_USER_AGENT",
        "lunchomatic/0.1 (decision-randomizer)",
    );
    let retry_backoff_ms = parse_u64("LUNCHOMATIC_RETRY_BACKOFF_MS", "250")?;

    let latitude = parse_f64("LUNCHOMATIC_LATITUDE")?;
    let longitude = parse_f64("LUNCHOMATIC_LONGITUDE")?;
    let fixed_location = parse_fixed_location(latitude, longitude)?;

    Ok(AppConfig {
        log_level,
        endpoints,
        radius_tiers,
        result_limit,
        request_timeout_secs,
        user_agent,
        retry_backoff_ms,
        fixed_location,
    })
}

/// Split a comma-separated endpoint list, dropping blank entries.
fn parse_endpoints(raw: &str) -> Result<Vec<String>, ConfigError> {
    let endpoints: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if endpoints.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LUNCHOMATIC_ENDPOINTS".to_string(),
            reason: "at least one endpoint URL is required".to_string(),
        });
    }
    if let Some(bad) = endpoints
        .iter()
        .find(|e| !(e.starts_with("http://") || e.starts_with("https://")))
    {
        return Err(ConfigError::InvalidEnvVar {
            var: "LUNCHOMATIC_ENDPOINTS".to_string(),
            reason: format!("\"{bad}\" is not an http(s) URL"),
        });
    }
    Ok(endpoints)
}

/// Latitude and longitude must be set together.
fn parse_fixed_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<Coordinates>, ConfigError> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => Coordinates::new(lat, lng).map(Some).map_err(|e| {
            ConfigError::InvalidEnvVar {
                var: "LUNCHOMATIC_LATITUDE/LUNCHOMATIC_LONGITUDE".to_string(),
                reason: e.to_string(),
            }
        }),
        (Some(_), None) => Err(ConfigError::MissingEnvVar(
            "LUNCHOMATIC_LONGITUDE".to_string(),
        )),
        (None, Some(_)) => Err(ConfigError::MissingEnvVar(
            "LUNCHOMATIC_LATITUDE".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::ConfigError;

/// One rung of the search-radius ladder.
///
/// `timeout_secs` is the server-side budget written into the Overpass query
/// for this radius; larger radii get longer budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusTier {
    pub radius_m: u32,
    pub timeout_secs: u32,
}

impl RadiusTier {
    #[must_use]
    pub const fn new(radius_m: u32, timeout_secs: u32) -> Self {
        Self {
            radius_m,
            timeout_secs,
        }
    }
}

/// The default ladder, largest radius first.
pub const DEFAULT_RADIUS_TIERS: [RadiusTier; 3] = [
    RadiusTier::new(8_000, 45),
    RadiusTier::new(5_000, 30),
    RadiusTier::new(3_000, 20),
];

/// Parses a `radius_m:timeout_secs` list such as `"8000:45,5000:30,3000:20"`.
///
/// Tiers must be non-empty, non-zero, and strictly decreasing in radius.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] naming `var` when the list is empty,
/// an entry is malformed, or the radii are not strictly decreasing.
pub fn parse_radius_tiers(var: &str, raw: &str) -> Result<Vec<RadiusTier>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let mut tiers: Vec<RadiusTier> = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (radius, timeout) = entry
            .split_once(':')
            .ok_or_else(|| invalid(format!("expected radius_m:timeout_secs, got \"{entry}\"")))?;
        let radius_m = radius
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid(format!("bad radius in \"{entry}\": {e}")))?;
        let timeout_secs = timeout
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid(format!("bad timeout in \"{entry}\": {e}")))?;
        if radius_m == 0 || timeout_secs == 0 {
            return Err(invalid(format!("radius and timeout must be positive in \"{entry}\"")));
        }
        if let Some(prev) = tiers.last() {
            if radius_m >= prev.radius_m {
                return Err(invalid(format!(
                    "radii must be strictly decreasing ({} then {radius_m})",
                    prev.radius_m
                )));
            }
        }
        tiers.push(RadiusTier::new(radius_m, timeout_secs));
    }

    if tiers.is_empty() {
        return Err(invalid("at least one radius tier is required".to_string()));
    }
    Ok(tiers)
}

use std::future::Future;

use lunchomatic_core::Coordinates;

use crate::error::{LocationError, PositionError};

/// A platform capability that can report the device's current position.
///
/// Implementations resolve exactly once per call; no retry or caching is
/// expected at this layer.
pub trait Geolocation: Send + Sync {
    fn current_position(&self)
        -> impl Future<Output = Result<Coordinates, PositionError>> + Send;
}

/// A capability that always reports the same preset position.
///
/// Used by the CLI when coordinates come from flags or the environment.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

impl Geolocation for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        Ok(self.0)
    }
}

/// Single-shot location lookup over an optional platform capability.
pub struct LocationProvider<G> {
    geolocation: Option<G>,
}

impl<G: Geolocation> LocationProvider<G> {
    pub fn new(geolocation: G) -> Self {
        Self {
            geolocation: Some(geolocation),
        }
    }

    /// A provider for a platform that offers no geolocation capability.
    #[must_use]
    pub fn unsupported() -> Self {
        Self { geolocation: None }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.geolocation.is_some()
    }

    /// Asks the platform for the current position.
    ///
    /// # Errors
    ///
    /// - [`LocationError::UnsupportedCapability`] when no capability exists.
    /// - [`LocationError::PermissionDenied`] for platform error code 1.
    /// - [`LocationError::LocationUnavailable`] for every other platform error.
    pub async fn get_current_location(&self) -> Result<Coordinates, LocationError> {
        let Some(geolocation) = self.geolocation.as_ref() else {
            tracing::warn!("no geolocation capability available");
            return Err(LocationError::UnsupportedCapability);
        };

        match geolocation.current_position().await {
            Ok(coords) => {
                tracing::debug!(
                    latitude = coords.latitude(),
                    longitude = coords.longitude(),
                    "resolved current position"
                );
                Ok(coords)
            }
            Err(err) => {
                tracing::warn!(code = err.code, error = %err, "geolocation request failed");
                Err(LocationError::from(err))
            }
        }
    }
}

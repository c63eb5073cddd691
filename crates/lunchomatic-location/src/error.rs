use lunchomatic_core::FailureKind;
use thiserror::Error;

/// Raw failure reported by a platform geolocation capability.
///
/// `code` follows the platform convention: `1` permission denied, `2`
/// position unavailable, `3` timeout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("geolocation error {code}: {message}")]
pub struct PositionError {
    pub code: u16,
    pub message: String,
}

impl PositionError {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors returned by [`crate::LocationProvider::get_current_location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No geolocation capability is present at all.
    #[error("Geolocation is not supported on this platform.")]
    UnsupportedCapability,

    /// The user declined the permission prompt.
    #[error("Location access denied. Please enable permission.")]
    PermissionDenied,

    /// Timeout, unavailable position, or any other platform failure.
    #[error("Unable to retrieve your location.")]
    LocationUnavailable { code: u16, message: String },
}

impl LocationError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            LocationError::UnsupportedCapability => FailureKind::UnsupportedCapability,
            LocationError::PermissionDenied => FailureKind::PermissionDenied,
            LocationError::LocationUnavailable { .. } => FailureKind::LocationUnavailable,
        }
    }
}

impl From<PositionError> for LocationError {
    fn from(err: PositionError) -> Self {
        if err.code == PositionError::PERMISSION_DENIED {
            LocationError::PermissionDenied
        } else {
            LocationError::LocationUnavailable {
                code: err.code,
                message: err.message,
            }
        }
    }
}

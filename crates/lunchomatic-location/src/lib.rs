//! Location provider: turns a platform geolocation capability into validated
//! [`Coordinates`] or a classified [`LocationError`].

pub mod error;
pub mod provider;

pub use error::{LocationError, PositionError};
pub use provider::{FixedPosition, Geolocation, LocationProvider};

pub use lunchomatic_core::Coordinates;

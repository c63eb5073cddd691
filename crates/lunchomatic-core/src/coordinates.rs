use serde::Deserialize;
use thiserror::Error;

/// A validated WGS-84 position.
///
/// Construction goes through [`Coordinates::new`], so every value in
/// circulation is finite and inside the valid latitude/longitude ranges.
/// `0.0` is an ordinary coordinate (the equator or the prime meridian); an
/// absent location is expressed as `Option<Coordinates>` by callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinatesError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinates {
    /// Validates and builds a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatesError`] if either value is NaN, infinite, or out
    /// of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinatesError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinatesError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCoordinates::deserialize(deserializer)?;
        Coordinates::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_as_a_real_coordinate() {
        let c = Coordinates::new(0.0, 0.0).expect("null island is a valid position");
        assert!(c.latitude().abs() < f64::EPSILON);
        assert!(c.longitude().abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(CoordinatesError::LatitudeOutOfRange(90.5))
        );
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        assert_eq!(
            Coordinates::new(0.0, -181.0),
            Err(CoordinatesError::LongitudeOutOfRange(-181.0))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display_is_lat_comma_lng() {
        let c = Coordinates::new(40.7128, -74.006).unwrap();
        assert_eq!(c.to_string(), "40.7128,-74.006");
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: Coordinates =
            serde_json::from_str(r#"{"latitude": 51.5, "longitude": -0.12}"#).unwrap();
        assert!((ok.latitude() - 51.5).abs() < f64::EPSILON);

        let bad = serde_json::from_str::<Coordinates>(r#"{"latitude": 120.0, "longitude": 0.0}"#);
        assert!(bad.is_err(), "out-of-range latitude must not deserialize");
    }
}

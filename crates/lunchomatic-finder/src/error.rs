use lunchomatic_core::FailureKind;
use thiserror::Error;

/// Errors returned by [`crate::RestaurantFinder::find_restaurants`].
///
/// Internal retries are never surfaced: a caller only ever sees the terminal
/// error of a search.
#[derive(Debug, Error)]
pub enum FinderError {
    /// No coordinates were supplied.
    #[error("Location required for real data search.")]
    MissingLocation,

    /// Every endpoint at every radius answered with a transient status.
    #[error("Overpass API Error: {status} from {endpoint} (gave up after {attempts} attempts)")]
    TransientServiceError {
        status: u16,
        endpoint: String,
        attempts: usize,
    },

    /// The service answered with a status that is not retried.
    #[error("Overpass API Error: {status} from {endpoint}")]
    NonTransientServiceError { status: u16, endpoint: String },

    /// The response contained no elements at all.
    #[error("No places found nearby! Try a different category?")]
    NoPlaces,

    /// The response contained elements, but none carried a usable name.
    #[error("Found places but they have no names. Spooky.")]
    UnnamedPlaces { element_count: usize },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The finder configuration cannot drive a search.
    #[error("invalid finder configuration: {0}")]
    InvalidConfig(String),
}

impl FinderError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            FinderError::MissingLocation => FailureKind::MissingLocation,
            FinderError::TransientServiceError { .. } => FailureKind::TransientServiceError,
            FinderError::NonTransientServiceError { .. } => FailureKind::NonTransientServiceError,
            FinderError::InvalidConfig(_) => FailureKind::Config,
            FinderError::NoPlaces | FinderError::UnnamedPlaces { .. } => FailureKind::NoResults,
            FinderError::Http(_) => FailureKind::Network,
            FinderError::Deserialize { .. } => FailureKind::MalformedResponse,
        }
    }
}

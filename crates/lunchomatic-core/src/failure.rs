/// Classification shared by every failure a spin can end with.
///
/// Library error types map onto this through their `kind()` method so the
/// presentation layer can branch on the class of failure without matching
/// each crate's error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// No coordinates were supplied to the search.
    MissingLocation,
    /// The platform has no geolocation capability.
    UnsupportedCapability,
    /// The user declined the location prompt.
    PermissionDenied,
    /// The platform reported a timeout or an unavailable position.
    LocationUnavailable,
    /// Every endpoint and radius returned a transient status.
    TransientServiceError,
    /// The service answered with a status that is not worth retrying.
    NonTransientServiceError,
    /// The service answered but nothing usable came back.
    NoResults,
    /// The request never produced an HTTP response.
    Network,
    /// The response body could not be decoded.
    MalformedResponse,
    /// Local configuration cannot drive a search; no request was sent.
    Config,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureKind::MissingLocation => "missing_location",
            FailureKind::UnsupportedCapability => "unsupported_capability",
            FailureKind::PermissionDenied => "permission_denied",
            FailureKind::LocationUnavailable => "location_unavailable",
            FailureKind::TransientServiceError => "transient_service_error",
            FailureKind::NonTransientServiceError => "non_transient_service_error",
            FailureKind::NoResults => "no_results",
            FailureKind::Network => "network",
            FailureKind::MalformedResponse => "malformed_response",
            FailureKind::Config => "config",
        };
        f.write_str(s)
    }
}

//! Restaurant lookup against the OpenStreetMap Overpass API.
//!
//! [`RestaurantFinder::find_restaurants`] builds an Overpass QL query for the
//! caller's position and optional [`Category`], walks the endpoint/radius
//! fallback ladder on transient failures, and returns a deduplicated,
//! non-empty list of place names.

pub mod client;
pub mod config;
pub mod error;
pub mod ladder;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::{is_transient_status, RestaurantFinder};
pub use config::{default_category_filters, generic_eatery_filter, FinderConfig, TagFilter, TagMatch};
pub use error::FinderError;
pub use ladder::{FallbackLadder, LadderPosition};
pub use normalize::normalize_names;
pub use query::build_query;
pub use types::{
    AttemptOutcome, AttemptRecord, FoundPlaces, OverpassElement, OverpassResponse, SearchRequest,
};

pub use lunchomatic_core::{Category, Coordinates, RadiusTier};

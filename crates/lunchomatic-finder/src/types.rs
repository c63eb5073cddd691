use std::collections::BTreeMap;

use lunchomatic_core::{Category, Coordinates, RadiusTier};
use serde::Deserialize;

/// One attempt's worth of search parameters.
///
/// A new value is built for every attempt of the fallback ladder; an issued
/// request is never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest {
    pub coordinates: Coordinates,
    pub category: Option<Category>,
    pub tier: RadiusTier,
    pub endpoint_index: usize,
}

impl SearchRequest {
    #[must_use]
    pub fn radius_m(&self) -> u32 {
        self.tier.radius_m
    }
}

/// Top-level body returned by the Overpass interpreter with `[out:json]`.
///
/// A missing `elements` array is treated the same as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A node, way, or relation. Only the tag map is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: Option<String>,
    pub id: Option<i64>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl OverpassElement {
    /// The `name` tag, if present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.tags
            .get("name")
            .map(String::as_str)
            .filter(|n| !n.is_empty())
    }
}

/// How a single attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// 2xx response; the body was handed to normalization.
    Success,
    /// 502, 504, or 429; the ladder moved on.
    Transient(u16),
}

/// Trace entry for one request issued during a search.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    pub request: SearchRequest,
    pub endpoint: String,
    pub outcome: AttemptOutcome,
}

/// A successful search: the names plus how they were obtained.
#[derive(Debug, Clone)]
pub struct FoundPlaces {
    names: Vec<String>,
    request: SearchRequest,
    attempts: Vec<AttemptRecord>,
}

impl FoundPlaces {
    /// `names` must be non-empty; [`crate::normalize_names`] guarantees this.
    pub(crate) fn new(
        names: Vec<String>,
        request: SearchRequest,
        attempts: Vec<AttemptRecord>,
    ) -> Self {
        debug_assert!(!names.is_empty(), "a successful search carries names");
        Self {
            names,
            request,
            attempts,
        }
    }

    /// Deduplicated names in first-seen order. Never empty.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// The request that produced these names.
    #[must_use]
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// Every attempt issued, in order, including the successful one.
    #[must_use]
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_without_elements_field_is_empty() {
        let resp: OverpassResponse = serde_json::from_str(r#"{"version": 0.6}"#).unwrap();
        assert!(resp.elements.is_empty());
    }

    #[test]
    fn element_without_tags_has_no_name() {
        let el: OverpassElement =
            serde_json::from_str(r#"{"type": "node", "id": 1, "lat": 1.0, "lon": 2.0}"#).unwrap();
        assert_eq!(el.element_type.as_deref(), Some("node"));
        assert!(el.name().is_none());
    }

    #[test]
    fn empty_name_tag_is_ignored() {
        let el: OverpassElement =
            serde_json::from_str(r#"{"type": "way", "tags": {"name": ""}}"#).unwrap();
        assert!(el.name().is_none());
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let el: OverpassElement =
            serde_json::from_str(r#"{"type": "way", "tags": {"name": "   "}}"#).unwrap();
        assert_eq!(el.name(), Some("   "));
    }

    #[test]
    fn parses_realistic_element() {
        let el: OverpassElement = serde_json::from_str(
            r#"{
                "type": "way",
                "id": 123456,
                "center": {"lat": 40.71, "lon": -74.0},
                "tags": {"amenity": "restaurant", "cuisine": "pizza", "name": "Joe's Pizza"}
            }"#,
        )
        .unwrap();
        assert_eq!(el.id, Some(123_456));
        assert_eq!(el.name(), Some("Joe's Pizza"));
    }
}

//! Projection of an Overpass response onto deduplicated place names.

use std::collections::HashSet;

use crate::error::FinderError;
use crate::types::OverpassResponse;

/// Extracts the usable place names from an Overpass response.
///
/// Elements without a non-empty `name` tag are dropped. Duplicates are
/// removed by exact string equality, keeping the first occurrence, so the
/// output order follows the server's element order.
///
/// # Errors
///
/// - [`FinderError::NoPlaces`] when the response has no elements.
/// - [`FinderError::UnnamedPlaces`] when elements exist but none is named.
pub fn normalize_names(response: &OverpassResponse) -> Result<Vec<String>, FinderError> {
    if response.elements.is_empty() {
        return Err(FinderError::NoPlaces);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let names: Vec<String> = response
        .elements
        .iter()
        .filter_map(|el| el.name())
        .filter(|name| seen.insert(*name))
        .map(str::to_owned)
        .collect();

    if names.is_empty() {
        return Err(FinderError::UnnamedPlaces {
            element_count: response.elements.len(),
        });
    }
    Ok(names)
}

//! Overpass QL construction.

use crate::config::FinderConfig;
use crate::types::SearchRequest;

/// Builds the Overpass QL text for one attempt.
///
/// The server-side timeout comes from the request's radius tier and the
/// element cap from `config.result_limit`. `out center` makes ways and
/// relations report a representative point alongside nodes.
#[must_use]
pub fn build_query(request: &SearchRequest, config: &FinderConfig) -> String {
    let filter = config.filter_for(request.category).to_ql();
    format!(
        "[out:json][timeout:{timeout}];\n(\n  nwr{filter}(around:{radius},{lat},{lng});\n);\nout center {limit};\n",
        timeout = request.tier.timeout_secs,
        radius = request.tier.radius_m,
        lat = request.coordinates.latitude(),
        lng = request.coordinates.longitude(),
        limit = config.result_limit,
    )
}

#[cfg(test)]
mod tests {
    use lunchomatic_core::{Category, Coordinates, RadiusTier};

    use super::*;

    fn request(category: Option<Category>) -> SearchRequest {
        SearchRequest {
            coordinates: Coordinates::new(40.7128, -74.006).unwrap(),
            category,
            tier: RadiusTier::new(8000, 45),
            endpoint_index: 0,
        }
    }

    fn query_for(category: Option<Category>) -> String {
        build_query(&request(category), &FinderConfig::default())
    }

    #[test]
    fn no_filter_uses_generic_eatery_tags() {
        let q = query_for(None);
        assert_eq!(
            q,
            "[out:json][timeout:45];\n(\n  nwr[\"amenity\"~\"restaurant|fast_food|cafe\"](around:8000,40.7128,-74.006);\n);\nout center 50;\n"
        );
    }

    #[test]
    fn burgers_filter() {
        assert!(query_for(Some(Category::Burgers)).contains(r#"nwr["cuisine"="burger"](around:"#));
    }

    #[test]
    fn pizza_filter() {
        assert!(query_for(Some(Category::Pizza)).contains(r#"nwr["cuisine"="pizza"](around:"#));
    }

    #[test]
    fn asian_filter() {
        assert!(query_for(Some(Category::Asian))
            .contains(r#"nwr["cuisine"~"asian|chinese|japanese|thai|vietnamese"](around:"#));
    }

    #[test]
    fn mexican_filter() {
        assert!(query_for(Some(Category::Mexican)).contains(r#"nwr["cuisine"="mexican"](around:"#));
    }

    #[test]
    fn seafood_filter() {
        assert!(query_for(Some(Category::Seafood)).contains(r#"nwr["cuisine"="seafood"](around:"#));
    }

    #[test]
    fn diner_filter() {
        assert!(query_for(Some(Category::Diner)).contains(r#"nwr["cuisine"="diner"](around:"#));
    }

    #[test]
    fn dessert_filter() {
        assert!(query_for(Some(Category::Dessert))
            .contains(r#"nwr["cuisine"~"ice_cream|bakery"](around:"#));
    }

    #[test]
    fn category_filter_replaces_generic_filter() {
        let q = query_for(Some(Category::Pizza));
        assert!(!q.contains("amenity"), "category query should not include the generic filter: {q}");
    }

    #[test]
    fn timeout_and_radius_follow_the_tier() {
        let mut req = request(None);
        req.tier = RadiusTier::new(3000, 20);
        let q = build_query(&req, &FinderConfig::default());
        assert!(q.starts_with("[out:json][timeout:20];"), "got: {q}");
        assert!(q.contains("(around:3000,"), "got: {q}");
    }

    #[test]
    fn result_limit_is_configurable() {
        let cfg = FinderConfig {
            result_limit: 12,
            ..FinderConfig::default()
        };
        assert!(build_query(&request(None), &cfg).contains("out center 12;"));
    }

    #[test]
    fn zero_coordinates_are_rendered_verbatim() {
        let mut req = request(None);
        req.coordinates = Coordinates::new(0.0, 0.0).unwrap();
        assert!(build_query(&req, &FinderConfig::default()).contains("(around:8000,0,0);"));
    }
}

//! Injected configuration for [`crate::RestaurantFinder`].
//!
//! Production callers build a [`FinderConfig`] from the environment via
//! [`FinderConfig::from_app_config`]; tests construct one directly to point
//! at mock endpoints or shrink the radius ladder.

use std::collections::BTreeMap;

use lunchomatic_core::config::{DEFAULT_ENDPOINTS, DEFAULT_RESULT_LIMIT};
use lunchomatic_core::radius::DEFAULT_RADIUS_TIERS;
use lunchomatic_core::{AppConfig, Category, RadiusTier};
use reqwest::Url;

use crate::error::FinderError;

/// How a tag value is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch {
    /// `["key"="value"]`
    Exact(String),
    /// `["key"~"a|b|c"]`
    AnyOf(Vec<String>),
}

/// A single Overpass tag predicate such as `["cuisine"="pizza"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    pub key: String,
    pub matcher: TagMatch,
}

impl TagFilter {
    pub fn exact(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            matcher: TagMatch::Exact(value.to_owned()),
        }
    }

    pub fn any_of(key: &str, values: &[&str]) -> Self {
        Self {
            key: key.to_owned(),
            matcher: TagMatch::AnyOf(values.iter().map(|v| (*v).to_owned()).collect()),
        }
    }

    /// Renders the predicate in Overpass QL bracket syntax.
    #[must_use]
    pub fn to_ql(&self) -> String {
        let key = escape_ql(&self.key);
        match &self.matcher {
            TagMatch::Exact(value) => format!("[\"{key}\"=\"{}\"]", escape_ql(value)),
            TagMatch::AnyOf(values) => {
                let alternatives: Vec<String> = values.iter().map(|v| escape_ql(v)).collect();
                format!("[\"{key}\"~\"{}\"]", alternatives.join("|"))
            }
        }
    }
}

/// Escapes characters that would terminate a double-quoted QL string.
fn escape_ql(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Matches any eating establishment: restaurants, fast-food stands, and cafés.
#[must_use]
pub fn generic_eatery_filter() -> TagFilter {
    TagFilter::any_of("amenity", &["restaurant", "fast_food", "cafe"])
}

/// The built-in category → cuisine tag table.
#[must_use]
pub fn default_category_filters() -> BTreeMap<Category, TagFilter> {
    let mut table = BTreeMap::new();
    table.insert(Category::Burgers, TagFilter::exact("cuisine", "burger"));
    table.insert(Category::Pizza, TagFilter::exact("cuisine", "pizza"));
    table.insert(
        Category::Asian,
        TagFilter::any_of("cuisine", &["asian", "chinese", "japanese", "thai", "vietnamese"]),
    );
    table.insert(Category::Mexican, TagFilter::exact("cuisine", "mexican"));
    table.insert(Category::Seafood, TagFilter::exact("cuisine", "seafood"));
    table.insert(Category::Diner, TagFilter::exact("cuisine", "diner"));
    table.insert(
        Category::Dessert,
        TagFilter::any_of("cuisine", &["ice_cream", "bakery"]),
    );
    table
}

/// Everything the finder needs besides the caller's position and category.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Interpreter URLs in fallback order; index 0 is the primary.
    pub endpoints: Vec<Url>,
    /// Radius ladder, largest first.
    pub radius_tiers: Vec<RadiusTier>,
    /// Per-category filters. Categories absent here use [`generic_eatery_filter`].
    pub category_filters: BTreeMap<Category, TagFilter>,
    /// Server-side element cap written into `out center <n>`.
    pub result_limit: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Base pause before each fallback attempt, jittered ±25 %. `0` disables it.
    pub retry_backoff_ms: u64,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS
                .iter()
                .filter_map(|u| Url::parse(u).ok())
                .collect(),
            radius_tiers: DEFAULT_RADIUS_TIERS.to_vec(),
            category_filters: default_category_filters(),
            result_limit: DEFAULT_RESULT_LIMIT,
            request_timeout_secs: 60,
            user_agent: "lunchomatic/0.1 (decision-randomizer)".to_string(),
            retry_backoff_ms: 250,
        }
    }
}

impl FinderConfig {
    /// Builds a finder configuration from the loaded application config.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidConfig`] if an endpoint is not a valid URL,
    /// or if the endpoint list or radius ladder is empty.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FinderError> {
        let endpoints = config
            .endpoints
            .iter()
            .map(|raw| {
                Url::parse(raw)
                    .map_err(|e| FinderError::InvalidConfig(format!("invalid endpoint '{raw}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let built = Self {
            endpoints,
            radius_tiers: config.radius_tiers.clone(),
            category_filters: default_category_filters(),
            result_limit: config.result_limit,
            request_timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            retry_backoff_ms: config.retry_backoff_ms,
        };
        built.validate()?;
        Ok(built)
    }

    /// Replaces the endpoint list, failing on any unparseable URL.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidConfig`] for an invalid URL.
    pub fn with_endpoints<S: AsRef<str>>(mut self, endpoints: &[S]) -> Result<Self, FinderError> {
        self.endpoints = endpoints
            .iter()
            .map(|raw| {
                let raw = raw.as_ref();
                Url::parse(raw)
                    .map_err(|e| FinderError::InvalidConfig(format!("invalid endpoint '{raw}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    /// Checks the invariants the fallback ladder depends on.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidConfig`] for an empty endpoint list, an
    /// empty radius ladder, or a zero result limit.
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.endpoints.is_empty() {
            return Err(FinderError::InvalidConfig(
                "at least one endpoint is required".to_string(),
            ));
        }
        if self.radius_tiers.is_empty() {
            return Err(FinderError::InvalidConfig(
                "at least one radius tier is required".to_string(),
            ));
        }
        if self.result_limit == 0 {
            return Err(FinderError::InvalidConfig(
                "result limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The filter used for `category`, falling back to the generic eatery filter.
    #[must_use]
    pub fn filter_for(&self, category: Option<Category>) -> TagFilter {
        category
            .and_then(|c| self.category_filters.get(&c).cloned())
            .unwrap_or_else(generic_eatery_filter)
    }
}

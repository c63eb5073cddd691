//! HTTP client for the Overpass interpreter.
//!
//! Wraps `reqwest` with the endpoint/radius fallback ladder, typed status
//! handling, and response normalization. Callers only observe a terminal
//! [`FoundPlaces`] or a terminal [`FinderError`].

use std::time::Duration;

use lunchomatic_core::{Category, Coordinates};
use reqwest::{Client, StatusCode, Url};

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::ladder::{FallbackLadder, LadderPosition};
use crate::normalize::normalize_names;
use crate::query::build_query;
use crate::types::{AttemptOutcome, AttemptRecord, FoundPlaces, OverpassResponse, SearchRequest};

const MAX_BACKOFF_MS: u64 = 5_000;

/// Returns `true` for statuses that move the search to the next ladder rung:
/// 502 Bad Gateway, 504 Gateway Timeout, and 429 Too Many Requests.
#[must_use]
pub fn is_transient_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT | StatusCode::TOO_MANY_REQUESTS
    )
}

/// What a single request produced, before normalization.
enum AttemptResponse {
    Body(OverpassResponse),
    Transient(StatusCode),
}

/// Finds named eateries near a position.
///
/// The finder holds only immutable configuration and a connection pool;
/// every call to [`RestaurantFinder::find_restaurants`] tracks its own
/// ladder position in locals.
pub struct RestaurantFinder {
    client: Client,
    config: FinderConfig,
    ladder: FallbackLadder,
}

impl RestaurantFinder {
    /// Creates a finder with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`FinderError::InvalidConfig`] if `config` fails [`FinderConfig::validate`].
    /// - [`FinderError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(config: FinderConfig) -> Result<Self, FinderError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;
        let ladder = FallbackLadder::new(config.radius_tiers.len(), config.endpoints.len());
        Ok(Self {
            client,
            config,
            ladder,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Searches for eateries around `location`, narrowed to `category` when given.
    ///
    /// Starts at the largest radius on the primary endpoint. Transient
    /// statuses walk the [`FallbackLadder`]; anything else ends the search.
    /// At most `endpoints × radius tiers` requests are issued, one at a time.
    ///
    /// # Errors
    ///
    /// - [`FinderError::MissingLocation`] if `location` is `None`; no request is made.
    /// - [`FinderError::TransientServiceError`] once every ladder rung returned
    ///   a transient status.
    /// - [`FinderError::NonTransientServiceError`] for any other non-2xx status.
    /// - [`FinderError::NoPlaces`] / [`FinderError::UnnamedPlaces`] when the
    ///   response holds nothing usable. These are not retried.
    /// - [`FinderError::Http`] on network failure.
    /// - [`FinderError::Deserialize`] if the body is not Overpass JSON.
    pub async fn find_restaurants(
        &self,
        location: Option<Coordinates>,
        category: Option<Category>,
    ) -> Result<FoundPlaces, FinderError> {
        let Some(coordinates) = location else {
            tracing::warn!(?category, "restaurant search requested without a location");
            return Err(FinderError::MissingLocation);
        };

        let max_attempts = self.ladder.max_attempts();
        let mut attempts: Vec<AttemptRecord> = Vec::with_capacity(max_attempts);
        let mut position = self.ladder.start();

        for _ in 0..max_attempts {
            let request = self.request_at(coordinates, category, position)?;
            let endpoint = self.endpoint_at(position)?;

            match self.attempt(&request, endpoint).await? {
                AttemptResponse::Body(body) => {
                    attempts.push(AttemptRecord {
                        request,
                        endpoint: endpoint.to_string(),
                        outcome: AttemptOutcome::Success,
                    });
                    let names = normalize_names(&body).inspect_err(|err| {
                        tracing::warn!(
                            endpoint = %endpoint,
                            radius_m = request.radius_m(),
                            elements = body.elements.len(),
                            error = %err,
                            "Overpass returned no usable places"
                        );
                    })?;
                    tracing::info!(
                        endpoint = %endpoint,
                        radius_m = request.radius_m(),
                        places = names.len(),
                        attempts = attempts.len(),
                        "found restaurants"
                    );
                    return Ok(FoundPlaces::new(names, request, attempts));
                }
                AttemptResponse::Transient(status) => {
                    attempts.push(AttemptRecord {
                        request,
                        endpoint: endpoint.to_string(),
                        outcome: AttemptOutcome::Transient(status.as_u16()),
                    });
                    let Some(next) = self.ladder.next(position) else {
                        break;
                    };
                    tracing::warn!(
                        status = status.as_u16(),
                        endpoint = %endpoint,
                        radius_m = request.radius_m(),
                        next_endpoint_index = next.endpoint_index,
                        next_radius_m = self.config.radius_tiers.get(next.tier_index).map(|t| t.radius_m),
                        "Overpass transient error; falling back"
                    );
                    self.pause_before_retry(attempts.len()).await;
                    position = next;
                }
            }
        }

        match attempts.last() {
            Some(AttemptRecord {
                endpoint,
                outcome: AttemptOutcome::Transient(status),
                ..
            }) => {
                tracing::warn!(
                    status,
                    endpoint = %endpoint,
                    attempts = attempts.len(),
                    "Overpass fallback ladder exhausted"
                );
                Err(FinderError::TransientServiceError {
                    status: *status,
                    endpoint: endpoint.clone(),
                    attempts: attempts.len(),
                })
            }
            _ => Err(FinderError::InvalidConfig(
                "fallback ladder ended without a transient attempt".to_string(),
            )),
        }
    }

    /// Builds a fresh request value for the given ladder position.
    fn request_at(
        &self,
        coordinates: Coordinates,
        category: Option<Category>,
        position: LadderPosition,
    ) -> Result<SearchRequest, FinderError> {
        let tier = self
            .config
            .radius_tiers
            .get(position.tier_index)
            .copied()
            .ok_or_else(|| {
                FinderError::InvalidConfig(format!("no radius tier at index {}", position.tier_index))
            })?;
        Ok(SearchRequest {
            coordinates,
            category,
            tier,
            endpoint_index: position.endpoint_index,
        })
    }

    fn endpoint_at(&self, position: LadderPosition) -> Result<&Url, FinderError> {
        self.config
            .endpoints
            .get(position.endpoint_index)
            .ok_or_else(|| {
                FinderError::InvalidConfig(format!(
                    "no endpoint at index {}",
                    position.endpoint_index
                ))
            })
    }

    /// Sends one form-encoded POST and classifies the response status.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::NonTransientServiceError`] for non-2xx statuses
    /// not covered by [`is_transient_status`], [`FinderError::Http`] on network
    /// failure, and [`FinderError::Deserialize`] for an undecodable body.
    async fn attempt(
        &self,
        request: &SearchRequest,
        endpoint: &Url,
    ) -> Result<AttemptResponse, FinderError> {
        let query = build_query(request, &self.config);
        tracing::debug!(
            endpoint = %endpoint,
            radius_m = request.radius_m(),
            category = ?request.category,
            "querying Overpass"
        );

        let response = self
            .client
            .post(endpoint.clone())
            .form(&[("data", query.as_str())])
            .send()
            .await?;
        let status = response.status();

        if is_transient_status(status) {
            return Ok(AttemptResponse::Transient(status));
        }
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                endpoint = %endpoint,
                "Overpass rejected the query"
            );
            return Err(FinderError::NonTransientServiceError {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<OverpassResponse>(&body).map_err(|e| {
            FinderError::Deserialize {
                context: format!("Overpass response from {endpoint}"),
                source: e,
            }
        })?;
        Ok(AttemptResponse::Body(parsed))
    }

    /// Sleeps `retry_backoff_ms × 2^(n-1)` ±25 % before fallback attempt `n`,
    /// capped at [`MAX_BACKOFF_MS`].
    async fn pause_before_retry(&self, completed_attempts: usize) {
        let base = self.config.retry_backoff_ms;
        if base == 0 {
            return;
        }
        let exponent = u32::try_from(completed_attempts.saturating_sub(1))
            .unwrap_or(u32::MAX)
            .min(10);
        let capped = base.saturating_mul(1u64 << exponent).min(MAX_BACKOFF_MS);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

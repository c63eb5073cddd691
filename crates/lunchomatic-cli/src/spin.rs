//! Command handlers: locate the user, search, and present the result.
//!
//! Failures from either stage are logged with their [`FailureKind`] and then
//! surfaced as a single user-facing message; retries inside the finder are
//! never reported here.

use lunchomatic_core::{AppConfig, Category, Coordinates, FailureKind};
use lunchomatic_finder::{FinderConfig, FoundPlaces, RestaurantFinder};
use lunchomatic_location::{FixedPosition, LocationError, LocationProvider};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::links::map_search_url;
use crate::SearchArgs;

const UNSUPPORTED_LOCATION_HINT: &str = "Geolocation is not available. Pass --lat/--lng or set LUNCHOMATIC_LATITUDE/LUNCHOMATIC_LONGITUDE.";

pub(crate) fn print_categories() {
    println!("Any");
    for category in Category::ALL {
        println!("{category}");
    }
}

/// Locate, search, pick a winner, and print it with a map link.
///
/// # Errors
///
/// Returns the user-facing message of the first failing stage.
pub(crate) async fn run_spin(
    config: &AppConfig,
    search: &SearchArgs,
    show_all: bool,
) -> anyhow::Result<()> {
    let found = locate_and_search(config, search).await?;

    if show_all {
        for name in found.names() {
            println!("  {name}");
        }
        println!();
    }

    let winner = choose_winner(found.names(), &mut rand::rng())
        .ok_or_else(|| anyhow::anyhow!("No places found nearby! Try a different category?"))?;
    tracing::info!(
        winner = %winner,
        candidates = found.names().len(),
        "picked a winner"
    );
    println!("Let's Eat At: {winner}");
    println!("Open in maps: {}", map_search_url(winner));
    Ok(())
}

/// Locate and search, then print every name found.
///
/// # Errors
///
/// Returns the user-facing message of the first failing stage.
pub(crate) async fn run_list(config: &AppConfig, search: &SearchArgs) -> anyhow::Result<()> {
    let found = locate_and_search(config, search).await?;
    for name in found.names() {
        println!("{name}");
    }
    Ok(())
}

async fn locate_and_search(config: &AppConfig, search: &SearchArgs) -> anyhow::Result<FoundPlaces> {
    let provider = location_provider(config, search)?;
    let coordinates = provider.get_current_location().await.map_err(|err| {
        tracing::error!(kind = %err.kind(), error = %err, "could not determine location");
        anyhow::anyhow!(location_message(&err))
    })?;

    let finder = RestaurantFinder::new(FinderConfig::from_app_config(config)?)?;
    let category = search.category.0;
    finder
        .find_restaurants(Some(coordinates), category)
        .await
        .map_err(|err| {
            tracing::error!(kind = %err.kind(), error = %err, ?category, "restaurant search failed");
            anyhow::anyhow!(err.to_string())
        })
}

/// Command-line coordinates win over the configured fixed position; with
/// neither, the platform has no geolocation capability.
pub(crate) fn location_provider(
    config: &AppConfig,
    search: &SearchArgs,
) -> anyhow::Result<LocationProvider<FixedPosition>> {
    let from_flags = match (search.lat, search.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)?),
        _ => None,
    };
    Ok(from_flags
        .or(config.fixed_location)
        .map_or_else(LocationProvider::unsupported, |c| {
            LocationProvider::new(FixedPosition(c))
        }))
}

pub(crate) fn location_message(err: &LocationError) -> String {
    match err.kind() {
        FailureKind::UnsupportedCapability => UNSUPPORTED_LOCATION_HINT.to_string(),
        _ => err.to_string(),
    }
}

/// Uniformly random pick; `None` only for an empty slice.
pub(crate) fn choose_winner<'a, R: Rng + ?Sized>(
    names: &'a [String],
    rng: &mut R,
) -> Option<&'a String> {
    names.choose(rng)
}

//! Domain types, failure taxonomy, and environment configuration shared by every lunchomatic crate.

pub mod app_config;
pub mod category;
pub mod config;
pub mod coordinates;
pub mod failure;
pub mod radius;

pub use app_config::AppConfig;
pub use category::{Category, CategoryParseError};
pub use config::{load_app_config, load_app_config_from_env};
pub use coordinates::{Coordinates, CoordinatesError};
pub use failure::FailureKind;
pub use radius::RadiusTier;

use thiserror::Error;

/// Errors raised while reading application configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

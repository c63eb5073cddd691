mod links;
mod spin;

use clap::{Args, Parser, Subcommand};
use lunchomatic_core::config::DEFAULT_LOG_LEVEL;
use lunchomatic_core::{AppConfig, Category, ConfigError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lunchomatic")]
#[command(about = "Spin the wheel and let a nearby restaurant pick itself")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the cravings that can narrow a spin
    Categories,
    /// Find nearby places and pick one at random
    Spin {
        #[command(flatten)]
        search: SearchArgs,

        /// Also print every candidate the wheel spun over
        #[arg(long)]
        show_all: bool,
    },
    /// Find nearby places and print all of them
    List {
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Craving to narrow the search to (`any` for no filter)
    #[arg(long, short, default_value = "any", value_parser = parse_craving)]
    category: Craving,

    /// Latitude of the search origin; overrides `LUNCHOMATIC_LATITUDE`
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the search origin; overrides `LUNCHOMATIC_LONGITUDE`
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
}

/// A selected craving; `None` means no category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Craving(Option<Category>);

fn parse_craving(raw: &str) -> Result<Craving, String> {
    if raw.trim().eq_ignore_ascii_case("any") {
        return Ok(Craving(None));
    }
    raw.parse::<Category>()
        .map(|c| Craving(Some(c)))
        .map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli, lunchomatic_core::load_app_config).await
}

/// Dispatches a parsed command. Configuration is loaded only by the
/// commands that search, so `categories` works with a broken environment.
async fn run<F>(cli: Cli, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match cli.command {
        Commands::Categories => spin::print_categories(),
        Commands::Spin { search, show_all } => {
            let config = configure(load_config)?;
            spin::run_spin(&config, &search, show_all).await?;
        }
        Commands::List { search } => {
            let config = configure(load_config)?;
            spin::run_list(&config, &search).await?;
        }
    }

    Ok(())
}

/// Loads configuration and installs tracing. `RUST_LOG` wins; otherwise the
/// configured level is used, or the default when configuration is invalid.
fn configure<F>(load_config: F) -> anyhow::Result<AppConfig>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let loaded = load_config();
    init_tracing(
        loaded
            .as_ref()
            .map_or(DEFAULT_LOG_LEVEL, |config| config.log_level.as_str()),
    );
    if let Err(err) = &loaded {
        tracing::error!(error = %err, "invalid configuration");
    }
    Ok(loaded?)
}

fn init_tracing(fallback_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    // A global subscriber may already exist when handlers run inside tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests;

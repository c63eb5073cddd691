use clap::Parser;
use lunchomatic_core::{AppConfig, Coordinates};
use lunchomatic_location::LocationError;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn app_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        endpoints: vec!["http://127.0.0.1:1/api/interpreter".to_string()],
        radius_tiers: vec![lunchomatic_core::RadiusTier::new(1000, 10)],
        result_limit: 50,
        request_timeout_secs: 1,
        user_agent: "lunchomatic-test".to_string(),
        retry_backoff_ms: 0,
        fixed_location: None,
    }
}

fn search_args(args: &[&str]) -> SearchArgs {
    let mut argv = vec!["lunchomatic", "list"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("expected valid cli args");
    match cli.command {
        Commands::List { search } => search,
        other => panic!("expected list command, got: {other:?}"),
    }
}

#[test]
fn parses_categories_command() {
    let cli = Cli::try_parse_from(["lunchomatic", "categories"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Categories));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["lunchomatic"]).is_err());
}

#[test]
fn spin_defaults_to_any_craving() {
    let cli = Cli::try_parse_from(["lunchomatic", "spin"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Spin {
            search: SearchArgs {
                category: Craving(None),
                lat: None,
                lng: None,
            },
            show_all: false,
        }
    ));
}

#[test]
fn spin_accepts_category_case_insensitively() {
    let cli = Cli::try_parse_from(["lunchomatic", "spin", "--category", "pizza", "--show-all"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Spin {
            search: SearchArgs {
                category: Craving(Some(Category::Pizza)),
                ..
            },
            show_all: true,
        }
    ));
}

#[test]
fn unknown_category_is_rejected() {
    let err = Cli::try_parse_from(["lunchomatic", "spin", "--category", "tapas"]).unwrap_err();
    assert!(err.to_string().contains("unknown category"), "got: {err}");
}

#[test]
fn list_accepts_negative_coordinates() {
    let search = search_args(&["--lat", "-33.86", "--lng", "151.21", "-c", "Seafood"]);
    assert_eq!(search.lat, Some(-33.86));
    assert_eq!(search.lng, Some(151.21));
    assert_eq!(search.category, Craving(Some(Category::Seafood)));
}

#[test]
fn lat_without_lng_is_rejected() {
    assert!(Cli::try_parse_from(["lunchomatic", "list", "--lat", "40.0"]).is_err());
}

#[test]
fn parse_craving_any_is_no_filter() {
    assert_eq!(parse_craving("any"), Ok(Craving(None)));
    assert_eq!(parse_craving("ANY"), Ok(Craving(None)));
    assert_eq!(parse_craving("Dessert"), Ok(Craving(Some(Category::Dessert))));
}

#[test]
fn unsupported_location_message_explains_how_to_provide_one() {
    let msg = spin::location_message(&LocationError::UnsupportedCapability);
    assert!(msg.contains("--lat/--lng"), "got: {msg}");
}

#[test]
fn denied_and_unavailable_messages_match_the_app() {
    assert_eq!(
        spin::location_message(&LocationError::PermissionDenied),
        "Location access denied. Please enable permission."
    );
    assert_eq!(
        spin::location_message(&LocationError::LocationUnavailable {
            code: 3,
            message: "timeout".to_string()
        }),
        "Unable to retrieve your location."
    );
}

#[test]
fn choose_winner_picks_a_member() {
    let names: Vec<String> = ["A", "B", "C"].iter().map(|s| (*s).to_string()).collect();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let winner = spin::choose_winner(&names, &mut rng).expect("non-empty input");
        assert!(names.contains(winner));
    }
}

#[test]
fn choose_winner_covers_every_candidate() {
    let names: Vec<String> = ["A", "B", "C"].iter().map(|s| (*s).to_string()).collect();
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(spin::choose_winner(&names, &mut rng).cloned());
    }
    assert_eq!(seen.len(), 3, "uniform choice should reach every name");
}

#[test]
fn choose_winner_on_empty_is_none() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(spin::choose_winner(&[], &mut rng).is_none());
}

#[tokio::test]
async fn flags_override_configured_location() {
    let mut config = app_config();
    config.fixed_location = Some(Coordinates::new(1.0, 1.0).unwrap());
    let search = search_args(&["--lat", "2.5", "--lng", "-3.5"]);
    let provider = spin::location_provider(&config, &search).expect("valid flags");
    let coords = provider.get_current_location().await.expect("fixed position");
    assert_eq!(coords, Coordinates::new(2.5, -3.5).unwrap());
}

#[tokio::test]
async fn configured_location_is_used_without_flags() {
    let mut config = app_config();
    config.fixed_location = Some(Coordinates::new(0.0, 0.0).unwrap());
    let provider = spin::location_provider(&config, &search_args(&[])).expect("no flags");
    assert_eq!(
        provider.get_current_location().await,
        Ok(Coordinates::new(0.0, 0.0).unwrap())
    );
}

#[test]
fn no_location_source_is_unsupported() {
    let provider = spin::location_provider(&app_config(), &search_args(&[])).expect("no flags");
    assert!(!provider.is_supported());
}

#[test]
fn out_of_range_flags_are_rejected() {
    let search = search_args(&["--lat", "91", "--lng", "0"]);
    assert!(spin::location_provider(&app_config(), &search).is_err());
}

fn broken_config() -> Result<AppConfig, ConfigError> {
    Err(ConfigError::InvalidEnvVar {
        var: "LUNCHOMATIC_RESULT_LIMIT".to_string(),
        reason: "invalid digit found in string".to_string(),
    })
}

#[tokio::test]
async fn categories_runs_without_loading_config() {
    let cli = Cli::try_parse_from(["lunchomatic", "categories"]).expect("expected valid cli args");
    run(cli, || -> Result<AppConfig, ConfigError> {
        panic!("categories must not load configuration")
    })
    .await
    .expect("categories should succeed");
}

#[tokio::test]
async fn categories_ignores_a_broken_environment() {
    let cli = Cli::try_parse_from(["lunchomatic", "categories"]).expect("expected valid cli args");
    assert!(run(cli, broken_config).await.is_ok());
}

#[tokio::test]
async fn searching_commands_surface_config_errors() {
    for argv in [["lunchomatic", "spin"], ["lunchomatic", "list"]] {
        let cli = Cli::try_parse_from(argv).expect("expected valid cli args");
        let err = run(cli, broken_config).await.unwrap_err();
        assert!(
            err.to_string().contains("LUNCHOMATIC_RESULT_LIMIT"),
            "got: {err}"
        );
    }
}

#[test]
fn help_is_printed_by_the_parser() {
    let err = Cli::try_parse_from(["lunchomatic", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

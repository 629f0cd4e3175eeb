//! Tests for the Scribe configuration system.

use std::sync::Mutex;

use scribe_core::config::ScribeConfig;
use scribe_core::errors::ConfigError;
use scribe_core::Strategy;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all SCRIBE_ env vars to prevent cross-test contamination.
fn clear_scribe_env_vars() {
    for key in [
        "SCRIBE_ENDPOINT_URL",
        "SCRIBE_ENDPOINT_TIMEOUT_SECS",
        "SCRIBE_STRATEGY",
        "SCRIBE_EXPLORATION_SEED",
        "SCRIBE_CACHE_TTL_SECS",
        "SCRIBE_CACHE_ENABLED",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_when_no_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_scribe_env_vars();

    let dir = tempdir();
    let config = ScribeConfig::load_with_user_config(dir.path(), None).unwrap();

    assert_eq!(config.endpoint.base_url, "http://localhost:5000");
    assert_eq!(config.endpoint.timeout_secs, None);
    assert_eq!(config.cache.ttl_secs, 300);
    assert_eq!(config.generation.max_batch_fields, 5);
    assert_eq!(config.default_strategy(), Strategy::Related);
}

#[test]
fn layered_resolution_env_over_project_over_user() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_scribe_env_vars();

    let user_dir = tempdir();
    let user_path = user_dir.path().join("config.toml");
    std::fs::write(
        &user_path,
        r#"
[endpoint]
base_url = "http://user:5000"

[cache]
ttl_secs = 60
max_entries = 50
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("scribe.toml"),
        r#"
[cache]
ttl_secs = 120

[generation]
default_strategy = "smart"
"#,
    )
    .unwrap();

    std::env::set_var("SCRIBE_ENDPOINT_URL", "http://env:7000");

    let config = ScribeConfig::load_with_user_config(project.path(), Some(&user_path)).unwrap();

    // Env beats user for the URL.
    assert_eq!(config.endpoint.base_url, "http://env:7000");
    // Project beats user for the TTL, user value for capacity survives.
    assert_eq!(config.cache.ttl_secs, 120);
    assert_eq!(config.cache.max_entries, 50);
    // Alias accepted and resolved.
    assert_eq!(config.default_strategy(), Strategy::Related);

    clear_scribe_env_vars();
}

#[test]
fn invalid_toml_reports_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_scribe_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("scribe.toml"), "[cache\nttl_secs = ").unwrap();

    let err = ScribeConfig::load_with_user_config(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_rejects_unknown_strategy() {
    let err = ScribeConfig::from_toml("[generation]\ndefault_strategy = \"verbose\"").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "generation.default_strategy")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validation_rejects_zero_ttl_and_zero_batch() {
    assert!(ScribeConfig::from_toml("[cache]\nttl_secs = 0").is_err());
    assert!(ScribeConfig::from_toml("[cache]\nenabled = false\nttl_secs = 0").is_ok());
    assert!(ScribeConfig::from_toml("[generation]\nmax_batch_fields = 0").is_err());
}

#[test]
fn validation_bounds_date_spacing() {
    assert!(ScribeConfig::from_toml("[tables]\ndate_spacing_days = 0").is_err());
    assert!(ScribeConfig::from_toml("[tables]\ndate_spacing_days = 3650").is_ok());
    let err = ScribeConfig::from_toml("[tables]\ndate_spacing_days = 100000000").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "tables.date_spacing_days"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_scribe_env_vars();

    std::env::set_var("SCRIBE_CACHE_TTL_SECS", "soon");
    let dir = tempdir();
    let config = ScribeConfig::load_with_user_config(dir.path(), None).unwrap();
    assert_eq!(config.cache.ttl_secs, 300);

    clear_scribe_env_vars();
}

#[test]
fn round_trips_through_toml() {
    let config = ScribeConfig::default();
    let text = config.to_toml().unwrap();
    assert_eq!(ScribeConfig::from_toml(&text).unwrap(), config);
}

//! Tests for configuration system

use smartrecipe::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.catalog.ratings_path, "data/ratings.csv");
    assert_eq!(config.catalog.recipes_path, "data/recipes.csv");
    assert_eq!(config.feedback.path, "data/feedback.csv");
    assert_eq!(config.recommend.default_count, 5);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let config = Config::load(Some("does/not/exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.recommend.default_count, 5);
}

#[test]
fn test_bundled_sample_catalog_builds_engine() {
    let config = Config::load(None).expect("Failed to load config");

    let engine = smartrecipe::cli::load_engine(&config).expect("engine builds");

    assert_eq!(engine.user_ids(), &[1, 2, 3, 4]);
    assert!(!engine.vocabulary().is_empty());
}

#[test]
fn test_missing_catalog_refuses_to_start() {
    let mut config = Config::load(None).expect("Failed to load config");
    config.catalog.ratings_path = "data/missing.csv".to_string();

    assert!(smartrecipe::cli::load_engine(&config).is_err());
}

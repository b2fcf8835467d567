//! Unit tests for configuration helpers.
//!
//! Run with: cargo test --test config_unit_test

use entity_api::config::{Config, Deployment};

#[test]
fn deployment_parses_known_names() {
    assert!(matches!(Deployment::from_str("dev"), Deployment::Dev));
    assert!(matches!(
        Deployment::from_str("development"),
        Deployment::Dev
    ));
    assert!(matches!(Deployment::from_str("STAGING"), Deployment::Stage));
    assert!(matches!(
        Deployment::from_str("production"),
        Deployment::Prod
    ));
    assert!(matches!(Deployment::from_str("local"), Deployment::Local));
    // Unknown names fall back to Local
    assert!(matches!(
        Deployment::from_str("kubernetes"),
        Deployment::Local
    ));
}

#[test]
fn bind_address_joins_host_and_port() {
    let config = Config {
        database_url: "postgres://unused".to_string(),
        db_min_connections: 1,
        db_max_connections: 5,
        db_connect_timeout_seconds: 8,
        db_acquire_timeout_seconds: 5,
        api_host: "127.0.0.1".to_string(),
        api_port: 8080,
        deployment: Deployment::Local,
    };

    assert_eq!(config.bind_address(), "127.0.0.1:8080");
}

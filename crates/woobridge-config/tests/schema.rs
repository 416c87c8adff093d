//! Integration tests for woobridge-config schema types.

use std::time::Duration;
use woobridge_config::schema::{AppConfig, LoggingConfig, ServerConfig, UpstreamConfig};

#[test]
fn app_config_default_values() {
    let config = AppConfig::default();
    assert_eq!(config.server.bind, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.upstream.timeout_secs, 30);
    assert_eq!(config.logging.level, "info");
    assert!(config.store.site_url.is_none());
    assert!(config.store.username.is_none());
    assert!(config.store.consumer_key.is_none());
}

#[test]
fn app_config_serde_roundtrip() {
    let config = AppConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: AppConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.server.port, config.server.port);
    assert_eq!(back.upstream.timeout_secs, config.upstream.timeout_secs);
}

#[test]
fn upstream_timeout_returns_correct_duration() {
    let upstream = UpstreamConfig { timeout_secs: 45 };
    assert_eq!(upstream.timeout(), Duration::from_secs(45));
}

#[test]
fn upstream_default_timeout_30s() {
    let upstream = UpstreamConfig::default();
    assert_eq!(upstream.timeout(), Duration::from_secs(30));
}

#[test]
fn server_default_values() {
    let server = ServerConfig::default();
    assert_eq!(server.bind, "0.0.0.0");
    assert_eq!(server.port, 3000);
}

#[test]
fn logging_default_level() {
    let log = LoggingConfig::default();
    assert_eq!(log.level, "info");
}

#[test]
fn deny_unknown_fields_rejects_extra_section() {
    let json = r#"{"store":{},"server":{},"upstream":{},"logging":{},"unknown_key":"bad"}"#;
    let result: Result<AppConfig, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn partial_config_uses_defaults_for_missing() {
    let json = r#"{"server":{"port":8080}}"#;
    let config: AppConfig = serde_json::from_str(json).expect("parse");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.bind, "0.0.0.0"); // default
    assert_eq!(config.upstream.timeout_secs, 30); // default
}

#[test]
fn store_section_tolerates_extra_keys() {
    // Containers often export unrelated WORDPRESS_* variables; the store
    // section must not reject them.
    let json = r#"{"store":{"site_url":"https://shop.example.com","db_host":"ignored"}}"#;
    let config: AppConfig = serde_json::from_str(json).expect("parse");
    assert_eq!(
        config.store.site_url.as_deref(),
        Some("https://shop.example.com")
    );
}

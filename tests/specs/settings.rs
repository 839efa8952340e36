// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration is rejected before the bus starts, not at first emit.

use beacon_core::{ConfigError, LoggerSettings, TransportKind};
use beacon_transport::create_transport;

#[test]
fn a_file_transport_without_a_path_fails_fast() {
    let settings: LoggerSettings = toml::from_str(r#"transport = "file""#).unwrap();
    assert!(matches!(
        create_transport(&settings),
        Err(ConfigError::MissingPath)
    ));
}

#[test]
fn an_http_transport_without_an_endpoint_fails_fast() {
    let settings: LoggerSettings = toml::from_str(r#"transport = "http""#).unwrap();
    assert!(matches!(
        create_transport(&settings),
        Err(ConfigError::MissingEndpoint)
    ));
}

#[test]
fn a_malformed_endpoint_fails_fast() {
    let settings: LoggerSettings = toml::from_str(
        r#"
        transport = "http"
        endpoint = "::not-a-url::"
        "#,
    )
    .unwrap();
    assert!(matches!(
        create_transport(&settings),
        Err(ConfigError::InvalidEndpoint { .. })
    ));
}

#[test]
fn a_complete_configuration_builds_every_kind() {
    let dir = tempfile::tempdir().unwrap();

    let configs = [
        "transport = \"none\"".to_string(),
        "transport = \"console\"".to_string(),
        format!(
            "transport = \"file\"\npath = \"{}\"",
            dir.path().join("e.jsonl").display()
        ),
        "transport = \"http\"\nendpoint = \"https://collector.example.com/v1\"".to_string(),
    ];

    for config in configs {
        let settings: LoggerSettings = toml::from_str(&config).unwrap();
        assert!(create_transport(&settings).is_ok(), "config: {config}");
    }
}

#[test]
fn unknown_transport_kinds_fail_at_parse_time() {
    let parsed = toml::from_str::<LoggerSettings>(r#"transport = "kafka""#);
    assert!(parsed.is_err());
}

#[test]
fn default_settings_build_a_noop_pipeline() {
    let settings = LoggerSettings::default();
    assert_eq!(settings.transport, TransportKind::None);
    assert!(create_transport(&settings).is_ok());
}

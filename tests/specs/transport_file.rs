// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File sink wire format, end to end through the bus.

use beacon_bus::{AsyncEventBus, Event, EventType};
use beacon_core::{LoggerSettings, TransportKind};
use beacon_transport::create_transport;

#[tokio::test]
async fn emitted_events_land_as_ordered_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let settings = LoggerSettings {
        transport: TransportKind::File,
        path: Some(path.clone()),
        min_level: EventType::Debug,
        ..LoggerSettings::default()
    };
    let bus = AsyncEventBus::new(Some(create_transport(&settings).unwrap()));

    bus.start().await;
    bus.emit(Event::info("workflow", "a").with_data(serde_json::json!({"step": 1})))
        .await;
    bus.emit(Event::error("workflow", "b").with_name("finalize"))
        .await;
    bus.stop().await;

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["level"], "INFO");
    assert_eq!(first["namespace"], "workflow");
    assert_eq!(first["message"], "a");
    assert_eq!(first["data"], serde_json::json!({"step": 1}));
    assert!(first["timestamp"].is_string());

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["level"], "ERROR");
    assert_eq!(second["namespace"], "workflow.finalize");
    assert!(second.get("data").is_none());
}

#[tokio::test]
async fn the_transport_filter_applies_before_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let settings = LoggerSettings {
        transport: TransportKind::File,
        path: Some(path.clone()),
        min_level: EventType::Error,
        ..LoggerSettings::default()
    };
    let bus = AsyncEventBus::new(Some(create_transport(&settings).unwrap()));

    bus.start().await;
    bus.emit(Event::info("workflow", "dropped")).await;
    bus.emit(Event::error("workflow", "kept")).await;
    bus.stop().await;

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("kept"));
}

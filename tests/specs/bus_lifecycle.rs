// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus lifecycle: drain on stop, idempotence, restart, stopped-emit policy.

use crate::prelude::Recorder;
use beacon_bus::{AsyncEventBus, Event};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::test]
async fn stop_drains_the_backlog_before_returning() {
    let bus = AsyncEventBus::new(None);
    let recorder = Arc::new(Recorder::default());
    bus.add_listener("recorder", recorder.clone());

    bus.start().await;
    for i in 0..200 {
        bus.emit(Event::info("workflow", format!("e{i}"))).await;
    }

    let before = Instant::now();
    bus.stop().await;
    // well under the drain grace: this backlog is trivial to clear
    assert!(before.elapsed() < Duration::from_secs(5));

    assert_eq!(recorder.messages().len(), 200);
}

#[tokio::test]
async fn repeated_stop_and_start_are_no_ops() {
    let bus = AsyncEventBus::new(None);
    let recorder = Arc::new(Recorder::default());
    bus.add_listener("recorder", recorder.clone());

    // stop before ever starting: nothing to do
    bus.stop().await;

    bus.start().await;
    bus.start().await;
    bus.emit(Event::info("workflow", "once")).await;
    bus.stop().await;
    bus.stop().await;

    assert_eq!(recorder.messages(), vec!["once"]);
}

#[tokio::test]
async fn emitting_on_a_stopped_bus_drops_fanout_quietly() {
    crate::prelude::init_diagnostics();

    let bus = AsyncEventBus::new(None);
    let recorder = Arc::new(Recorder::default());
    bus.add_listener("recorder", recorder.clone());

    bus.emit(Event::info("workflow", "before-start")).await;

    bus.start().await;
    bus.emit(Event::info("workflow", "while-running")).await;
    bus.stop().await;

    bus.emit(Event::info("workflow", "after-stop")).await;

    assert_eq!(recorder.messages(), vec!["while-running"]);
}

#[tokio::test]
async fn a_stopped_bus_can_start_again() {
    let bus = AsyncEventBus::new(None);
    let recorder = Arc::new(Recorder::default());
    bus.add_listener("recorder", recorder.clone());

    for run in 0..3 {
        bus.start().await;
        bus.emit(Event::info("workflow", format!("run-{run}"))).await;
        bus.stop().await;
    }

    assert_eq!(recorder.messages(), vec!["run-0", "run-1", "run-2"]);
}

#[tokio::test]
async fn the_default_bus_is_shared_across_handles() {
    let a = beacon_bus::get();
    let b = beacon_bus::get();

    let recorder = Arc::new(Recorder::default());
    a.add_listener("recorder", recorder.clone());
    assert_eq!(b.listener_count(), 1);

    b.remove_listener("recorder");
    assert_eq!(a.listener_count(), 0);
}

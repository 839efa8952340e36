// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ambient trace context stamping at emit time.

use crate::prelude::Recorder;
use beacon_bus::{AsyncEventBus, Event};
use opentelemetry::trace::{TraceContextExt, Tracer, TracerProvider as _};
use std::sync::Arc;

#[tokio::test]
async fn events_inside_a_span_carry_its_identifiers() {
    let bus = AsyncEventBus::new(None);
    let recorder = Arc::new(Recorder::default());
    bus.add_listener("recorder", recorder.clone());
    bus.start().await;

    let provider = opentelemetry_sdk::trace::TracerProvider::builder().build();
    let tracer = provider.tracer("specs");
    let span = tracer.start("workflow-step");
    let cx = opentelemetry::Context::current_with_span(span);

    let (expected_trace, expected_span) = {
        let span_context = cx.span().span_context().clone();
        (
            span_context.trace_id().to_string(),
            span_context.span_id().to_string(),
        )
    };

    {
        let _guard = cx.attach();
        bus.emit(Event::info("workflow", "inside")).await;
    }
    bus.emit(Event::info("workflow", "outside")).await;
    bus.stop().await;

    let events = recorder.events();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].trace_id.as_deref(), Some(expected_trace.as_str()));
    assert_eq!(events[0].span_id.as_deref(), Some(expected_span.as_str()));

    assert!(events[1].trace_id.is_none());
    assert!(events[1].span_id.is_none());
}

#[tokio::test]
async fn producer_supplied_ids_are_not_overwritten() {
    let bus = AsyncEventBus::new(None);
    let recorder = Arc::new(Recorder::default());
    bus.add_listener("recorder", recorder.clone());
    bus.start().await;

    let provider = opentelemetry_sdk::trace::TracerProvider::builder().build();
    let tracer = provider.tracer("specs");
    let span = tracer.start("step");
    let cx = opentelemetry::Context::current_with_span(span);

    let mut event = Event::info("workflow", "pre-correlated");
    event.trace_id = Some("11111111111111111111111111111111".to_string());
    event.span_id = Some("2222222222222222".to_string());

    {
        let _guard = cx.attach();
        bus.emit(event).await;
    }
    bus.stop().await;

    let events = recorder.events();
    assert_eq!(
        events[0].trace_id.as_deref(),
        Some("11111111111111111111111111111111")
    );
    assert_eq!(events[0].span_id.as_deref(), Some("2222222222222222"));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process event consumers

use async_trait::async_trait;
use beacon_core::{Event, EventFilter};

/// Error surfaced by a listener callback; logged, never propagated
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// An in-process consumer of bus events
///
/// The lifecycle hooks default to no-ops, so simple listeners only
/// implement `handle_event`; lifecycle-aware ones override `start` and
/// `stop` and the bus drives them on its own transitions.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Called once when the bus starts
    async fn start(&self) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called once when the bus stops, under a bounded deadline
    async fn stop(&self) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Handle one event
    async fn handle_event(&self, event: &Event) -> Result<(), ListenerError>;
}

#[async_trait]
impl<L: EventListener + ?Sized> EventListener for std::sync::Arc<L> {
    async fn start(&self) -> Result<(), ListenerError> {
        (**self).start().await
    }

    async fn stop(&self) -> Result<(), ListenerError> {
        (**self).stop().await
    }

    async fn handle_event(&self, event: &Event) -> Result<(), ListenerError> {
        (**self).handle_event(event).await
    }
}

/// Wraps a listener so it only sees events matching a filter
pub struct FilteredListener<L> {
    filter: EventFilter,
    inner: L,
}

impl<L> FilteredListener<L> {
    pub fn new(filter: EventFilter, inner: L) -> Self {
        Self { filter, inner }
    }
}

#[async_trait]
impl<L: EventListener> EventListener for FilteredListener<L> {
    async fn start(&self) -> Result<(), ListenerError> {
        self.inner.start().await
    }

    async fn stop(&self) -> Result<(), ListenerError> {
        self.inner.stop().await
    }

    async fn handle_event(&self, event: &Event) -> Result<(), ListenerError> {
        if self.filter.matches(event) {
            self.inner.handle_event(event).await
        } else {
            Ok(())
        }
    }
}

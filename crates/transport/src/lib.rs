// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Delivery transports for beacon events
//!
//! A transport forwards filtered events out of the process: to the
//! terminal, a JSONL file, or a batched HTTP collector. Delivery is
//! best-effort: [`Transport::send`] never surfaces a failure to the
//! caller. Errors go to the tracing diagnostic channel and the event
//! (or batch) is dropped. A broken sink must never stop local event
//! flow.

mod console;
mod factory;
mod file;
mod http;
mod noop;

pub use console::ConsoleTransport;
pub use factory::create_transport;
pub use file::FileTransport;
pub use http::{HttpConfig, HttpTransport};
pub use noop::NoOpTransport;

use async_trait::async_trait;
use beacon_core::{Event, EventFilter};
use thiserror::Error;

/// Errors a transport can hit while delivering
///
/// These never cross [`Transport::send`]: they exist so concrete
/// transports can use `?` internally and the shared send path can log
/// one structured warning.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A delivery channel for events leaving the process
#[async_trait]
pub trait Transport: Send + Sync {
    /// Filter applied before delivery; `None` forwards everything
    fn filter(&self) -> Option<&EventFilter>;

    /// Deliver one event that already passed the filter
    async fn send_matched(&self, event: &Event) -> Result<(), TransportError>;

    /// Open connections or other delivery state; idempotent
    async fn start(&self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Flush buffered state and release resources; safe to call twice
    async fn stop(&self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Filter and deliver, never failing the caller
    async fn send(&self, event: &Event) {
        if let Some(filter) = self.filter() {
            if !filter.matches(event) {
                return;
            }
        }
        if let Err(e) = self.send_matched(event).await {
            tracing::warn!(
                namespace = %event.namespace,
                error = %e,
                "event delivery failed, dropping"
            );
        }
    }
}

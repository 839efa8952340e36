// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! beacon-bus: ordered ingestion and fan-out for beacon events
//!
//! This crate provides:
//! - The [`EventListener`] contract for in-process consumers
//! - [`AsyncEventBus`], the single ingestion point that forwards each
//!   event to the configured transport inline and fans it out to all
//!   registered listeners from one background dispatch task
//! - An installable process-wide default bus ([`install`] / [`get`])
//!
//! Delivery guarantees: listener fan-out preserves emit order across
//! events; listeners for the same event run concurrently with each
//! other; a failing listener never affects the others or the producer.

mod bus;
mod global;
mod listener;

pub use bus::AsyncEventBus;
pub use global::{get, install};
pub use listener::{EventListener, FilteredListener, ListenerError};

// Re-exports so embedders only need this crate for the common path
pub use beacon_core::{Event, EventFilter, EventType};
pub use beacon_transport::Transport;

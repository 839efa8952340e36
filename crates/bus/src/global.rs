// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide default bus

use crate::bus::AsyncEventBus;
use std::sync::OnceLock;

static DEFAULT_BUS: OnceLock<AsyncEventBus> = OnceLock::new();

/// Install `bus` as the process-wide default
///
/// The first install wins; a later call gets its bus back so the
/// caller can decide what to do with it. Tests should construct their
/// own buses with [`AsyncEventBus::new`] instead of touching the
/// default.
pub fn install(bus: AsyncEventBus) -> Result<(), AsyncEventBus> {
    DEFAULT_BUS.set(bus)
}

/// The process-wide default bus
///
/// Creates a bus with a no-op transport on first use if nothing was
/// installed. The returned handle shares state with every other
/// handle to the default bus.
pub fn get() -> AsyncEventBus {
    DEFAULT_BUS.get_or_init(AsyncEventBus::default).clone()
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport that goes nowhere

use crate::{Transport, TransportError};
use async_trait::async_trait;
use beacon_core::{Event, EventFilter};

/// Default transport: events are filtered and then discarded
///
/// Used when external delivery is disabled but the local listener
/// path should keep working.
#[derive(Default)]
pub struct NoOpTransport {
    filter: Option<EventFilter>,
}

impl NoOpTransport {
    pub fn new(filter: Option<EventFilter>) -> Self {
        Self { filter }
    }
}

#[async_trait]
impl Transport for NoOpTransport {
    fn filter(&self) -> Option<&EventFilter> {
        self.filter.as_ref()
    }

    async fn send_matched(&self, _event: &Event) -> Result<(), TransportError> {
        Ok(())
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal transport

use crate::{Transport, TransportError};
use async_trait::async_trait;
use beacon_core::{Event, EventFilter, EventType};
use colored::Colorize;

/// Renders events to stdout with a colorized one-line header
///
/// Header shape: `[LEVEL] timestamp namespace - message`, followed by
/// a pretty-printed dump of `data` when present. No state is retained
/// across calls.
pub struct ConsoleTransport {
    filter: Option<EventFilter>,
}

impl ConsoleTransport {
    pub fn new(filter: Option<EventFilter>) -> Self {
        Self { filter }
    }

    fn header(event: &Event) -> String {
        let level = format!("[{}]", event.event_type.as_str().to_uppercase());
        let level = match event.event_type {
            EventType::Debug => level.dimmed(),
            EventType::Info => level.green().bold(),
            EventType::Warning => level.yellow().bold(),
            EventType::Error => level.red().bold(),
        };
        format!(
            "{} {} {} - {}",
            level,
            event.timestamp.to_rfc3339().cyan(),
            event.full_namespace().magenta(),
            event.message
        )
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    fn filter(&self) -> Option<&EventFilter> {
        self.filter.as_ref()
    }

    async fn send_matched(&self, event: &Event) -> Result<(), TransportError> {
        println!("{}", Self::header(event));
        if let Some(data) = &event.data {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        Ok(())
    }
}

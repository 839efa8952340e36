// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire formats for events leaving the process

use crate::event::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One element of the HTTP sink's POST body
///
/// Nullable fields serialize as explicit `null` so the collector sees
/// a stable shape. Payload values pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub name: Option<String>,
    pub namespace: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub trace_id: Option<String>,
    pub span_id: Option<String>,
    pub context: Option<serde_json::Value>,
}

impl EventRecord {
    pub fn from_event(event: &Event) -> Self {
        Self {
            timestamp: event.timestamp,
            event_type: event.event_type.as_str().to_string(),
            name: event.name.clone(),
            namespace: event.namespace.clone(),
            message: event.message.clone(),
            data: event.data.clone(),
            trace_id: event.trace_id.clone(),
            span_id: event.span_id.clone(),
            context: event.context.clone(),
        }
    }
}

/// One line of the file sink's JSONL output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Severity, uppercased for scanning with plain text tools
    pub level: String,
    pub timestamp: DateTime<Utc>,
    /// `namespace.name` when the event carries a name
    pub namespace: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl FileRecord {
    pub fn from_event(event: &Event) -> Self {
        Self {
            level: event.event_type.as_str().to_uppercase(),
            timestamp: event.timestamp,
            namespace: event.full_namespace(),
            message: event.message.clone(),
            data: event.data.clone(),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types for the beacon bus

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an emitted event
///
/// The ordering is total: `Debug < Info < Warning < Error`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Debug => "debug",
            EventType::Info => "info",
            EventType::Warning => "warning",
            EventType::Error => "error",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(EventType::Debug),
            "info" => Ok(EventType::Info),
            "warning" => Ok(EventType::Warning),
            "error" => Ok(EventType::Error),
            other => Err(crate::error::ConfigError::InvalidLevel(other.to_string())),
        }
    }
}

/// One structured occurrence flowing through the bus
///
/// Events are immutable once emitted: producers build them with the
/// constructors below, and only the bus fills in `trace_id`/`span_id`
/// at emit time. The timestamp is assigned at construction; bus-wide
/// ordering follows emit order, not timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Hierarchical `.`-separated identifier of the emitting subsystem
    pub namespace: String,
    /// Optional fine-grained sub-identifier, displayed as `namespace.name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub message: String,
    /// Arbitrary structured payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
    /// Ambient trace correlation id (32 hex chars), stamped by the bus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Ambient span correlation id (16 hex chars), stamped by the bus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_id: Option<String>,
    /// Free-form correlation object attached by the producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl Event {
    /// Create a new event; the timestamp is taken now
    pub fn new(
        event_type: EventType,
        namespace: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            namespace: namespace.into(),
            name: None,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
            trace_id: None,
            span_id: None,
            context: None,
        }
    }

    pub fn debug(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EventType::Debug, namespace, message)
    }

    pub fn info(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EventType::Info, namespace, message)
    }

    pub fn warning(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EventType::Warning, namespace, message)
    }

    pub fn error(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EventType::Error, namespace, message)
    }

    /// Set the fine-grained sub-identifier
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Attach a structured payload
    pub fn with_data(self, data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..self
        }
    }

    /// Attach a correlation object
    pub fn with_context(self, context: serde_json::Value) -> Self {
        Self {
            context: Some(context),
            ..self
        }
    }

    /// Namespace for display: `namespace.name` when a name is present
    pub fn full_namespace(&self) -> String {
        match &self.name {
            Some(name) => format!("{}.{}", self.namespace, name),
            None => self.namespace.clone(),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

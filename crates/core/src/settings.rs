// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger settings consumed from the application configuration
//!
//! Loading and merging configuration files is the embedding
//! application's job; this is only the validated surface that
//! transports are built from.

use crate::error::ConfigError;
use crate::event::EventType;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Which delivery transport to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    None,
    Console,
    File,
    Http,
}

/// Settings for the event delivery pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerSettings {
    #[serde(default)]
    pub transport: TransportKind,
    /// Log file path, required when `transport = "file"`
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Collector URL, required when `transport = "http"`
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Extra headers sent with every batch
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Events per HTTP batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// HTTP request timeout, e.g. "5s"
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
    /// Severity floor for the transport filter
    #[serde(default)]
    pub min_level: EventType,
}

fn default_batch_size() -> usize {
    100
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            transport: TransportKind::None,
            path: None,
            endpoint: None,
            headers: HashMap::new(),
            batch_size: default_batch_size(),
            timeout: default_timeout(),
            min_level: EventType::default(),
        }
    }
}

impl LoggerSettings {
    /// Reject incomplete settings before anything is built from them
    ///
    /// Runs at configuration time, never at first emit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.transport {
            TransportKind::File if self.path.is_none() => Err(ConfigError::MissingPath),
            TransportKind::Http if self.endpoint.is_none() => Err(ConfigError::MissingEndpoint),
            TransportKind::Http if self.batch_size == 0 => Err(ConfigError::InvalidBatchSize),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

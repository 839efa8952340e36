// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File transport

use crate::{Transport, TransportError};
use async_trait::async_trait;
use beacon_core::{ConfigError, Event, EventFilter, FileRecord};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends one JSON line per event to a log file
///
/// The file is opened, written, flushed and closed on every event:
/// slower than a held handle, but a crashed writer or rotated file can
/// never wedge a descriptor across events.
pub struct FileTransport {
    path: PathBuf,
    filter: Option<EventFilter>,
}

impl FileTransport {
    /// Create the transport, creating missing parent directories
    pub fn new(path: impl Into<PathBuf>, filter: Option<EventFilter>) -> Result<Self, ConfigError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path, filter })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, line: &str) -> Result<(), TransportError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }
}

#[async_trait]
impl Transport for FileTransport {
    fn filter(&self) -> Option<&EventFilter> {
        self.filter.as_ref()
    }

    async fn send_matched(&self, event: &Event) -> Result<(), TransportError> {
        let line = serde_json::to_string(&FileRecord::from_event(event))?;
        self.append_line(&line)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

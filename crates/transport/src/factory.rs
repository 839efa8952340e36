// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings-driven transport construction

use crate::{ConsoleTransport, FileTransport, HttpConfig, HttpTransport, NoOpTransport, Transport};
use beacon_core::{ConfigError, EventFilter, LoggerSettings, TransportKind};
use std::sync::Arc;

/// Build the transport described by the settings
///
/// Validation is fail-fast: incomplete settings are rejected here,
/// before the bus ever starts, never at first emit.
pub fn create_transport(settings: &LoggerSettings) -> Result<Arc<dyn Transport>, ConfigError> {
    settings.validate()?;
    let filter = Some(EventFilter::min_level(settings.min_level));

    match settings.transport {
        TransportKind::None => Ok(Arc::new(NoOpTransport::new(filter))),
        TransportKind::Console => Ok(Arc::new(ConsoleTransport::new(filter))),
        TransportKind::File => {
            let path = settings.path.clone().ok_or(ConfigError::MissingPath)?;
            Ok(Arc::new(FileTransport::new(path, filter)?))
        }
        TransportKind::Http => {
            let endpoint = settings.endpoint.clone().ok_or(ConfigError::MissingEndpoint)?;
            let config = HttpConfig {
                endpoint,
                headers: settings.headers.clone(),
                batch_size: settings.batch_size,
                timeout: settings.timeout,
            };
            Ok(Arc::new(HttpTransport::new(config, filter)?))
        }
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration-time errors

use thiserror::Error;

/// Errors raised while building the event pipeline from settings
///
/// These are the only synchronous failures in the crate family: they
/// fire at configuration time, before the bus starts, and are fatal to
/// construction only, never to the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file transport requires a path")]
    MissingPath,

    #[error("http transport requires an endpoint")]
    MissingEndpoint,

    #[error("http batch size must be at least 1")]
    InvalidBatchSize,

    #[error("unknown log level: {0}")]
    InvalidLevel(String),

    #[error("invalid endpoint {endpoint}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("invalid http header: {0}")]
    InvalidHeader(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batched HTTP transport

use crate::{Transport, TransportError};
use async_trait::async_trait;
use beacon_core::{ConfigError, Event, EventFilter, EventRecord};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

/// Configuration for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub endpoint: String,
    pub headers: HashMap<String, String>,
    pub batch_size: usize,
    pub timeout: Duration,
}

impl HttpConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            batch_size: 100,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_batch_size(self, batch_size: usize) -> Self {
        Self { batch_size, ..self }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

/// Sends events to a collector endpoint in batches
///
/// Delivery is at-most-once: a failed POST is logged and the batch is
/// gone. There is no retry queue and no spooling; the buffer is taken
/// before the request goes out, so memory stays bounded no matter how
/// the sink behaves.
#[derive(Debug)]
pub struct HttpTransport {
    endpoint: reqwest::Url,
    headers: HeaderMap,
    batch_size: usize,
    timeout: Duration,
    filter: Option<EventFilter>,
    /// Pending events; the one piece of cross-call mutable state
    batch: Mutex<Vec<Event>>,
    /// Lazily built on `start` or first flush
    client: Mutex<Option<Client>>,
}

impl HttpTransport {
    /// Validate the endpoint and headers up front; nothing connects yet
    pub fn new(config: HttpConfig, filter: Option<EventFilter>) -> Result<Self, ConfigError> {
        let endpoint =
            reqwest::Url::parse(&config.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: e.to_string(),
            })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ConfigError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| ConfigError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        Ok(Self {
            endpoint,
            headers,
            batch_size: config.batch_size.max(1),
            timeout: config.timeout,
            filter,
            batch: Mutex::new(Vec::new()),
            client: Mutex::new(None),
        })
    }

    /// Number of events waiting for the next flush
    pub async fn pending(&self) -> usize {
        self.batch.lock().await.len()
    }

    async fn client(&self) -> Result<Client, TransportError> {
        let mut slot = self.client.lock().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        let client = Client::builder()
            .default_headers(self.headers.clone())
            .timeout(self.timeout)
            .build()?;
        *slot = Some(client.clone());
        Ok(client)
    }

    /// POST one batch; the caller has already taken it off the buffer
    async fn post_batch(&self, batch: Vec<Event>) -> Result<(), TransportError> {
        if batch.is_empty() {
            return Ok(());
        }

        let records: Vec<EventRecord> = batch.iter().map(EventRecord::from_event).collect();
        let client = self.client().await?;
        let response = client
            .post(self.endpoint.clone())
            .json(&records)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn filter(&self) -> Option<&EventFilter> {
        self.filter.as_ref()
    }

    async fn send_matched(&self, event: &Event) -> Result<(), TransportError> {
        let mut batch = self.batch.lock().await;
        batch.push(event.clone());
        if batch.len() >= self.batch_size {
            // Take the batch first: it must not survive a failed POST.
            // The lock is held across the request, so concurrent
            // senders queue behind one round trip per batch_size events.
            let pending = std::mem::take(&mut *batch);
            return self.post_batch(pending).await;
        }
        Ok(())
    }

    async fn start(&self) -> Result<(), TransportError> {
        self.client().await?;
        Ok(())
    }

    /// Flush leftovers, then drop the connection pool
    ///
    /// Safe when no client was ever created and safe to call twice.
    async fn stop(&self) -> Result<(), TransportError> {
        let pending = std::mem::take(&mut *self.batch.lock().await);
        if let Err(e) = self.post_batch(pending).await {
            tracing::warn!(endpoint = %self.endpoint, error = %e, "final flush failed, batch dropped");
        }
        *self.client.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;

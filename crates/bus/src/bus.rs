// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The async event bus

use crate::listener::EventListener;
use beacon_core::Event;
use beacon_transport::{NoOpTransport, Transport};
use opentelemetry::trace::TraceContextExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How long `stop` waits for queued events to finish dispatching
const DRAIN_GRACE: Duration = Duration::from_secs(5);
/// How long `stop` waits for the cancelled dispatch task to exit
const CANCEL_GRACE: Duration = Duration::from_secs(5);
/// Per-listener deadline for its `stop` hook
const LISTENER_STOP_GRACE: Duration = Duration::from_secs(3);

type ListenerMap = HashMap<String, Arc<dyn EventListener>>;

struct BusState {
    /// Sender half of the dispatch queue; `None` while stopped
    queue: Option<mpsc::UnboundedSender<Event>>,
    task: Option<JoinHandle<()>>,
    cancel: CancellationToken,
    running: bool,
}

/// Orders, stamps and fans out events
///
/// One ingestion point: [`emit`](Self::emit) stamps trace context,
/// forwards the event to the configured transport inline, and queues
/// it for the single background dispatch task, which fans each event
/// out to every registered listener concurrently and waits for all of
/// them before taking the next event. Clones share state.
///
/// `start`/`stop` are idempotent and the bus is restartable. They are
/// meant to be driven by the owning configurator, not called
/// concurrently with each other.
#[derive(Clone)]
pub struct AsyncEventBus {
    transport: Arc<dyn Transport>,
    listeners: Arc<RwLock<ListenerMap>>,
    state: Arc<Mutex<BusState>>,
}

impl AsyncEventBus {
    /// Create a bus with the given transport (no-op when `None`)
    pub fn new(transport: Option<Arc<dyn Transport>>) -> Self {
        Self {
            transport: transport.unwrap_or_else(|| Arc::new(NoOpTransport::default())),
            listeners: Arc::new(RwLock::new(HashMap::new())),
            state: Arc::new(Mutex::new(BusState {
                queue: None,
                task: None,
                cancel: CancellationToken::new(),
                running: false,
            })),
        }
    }

    /// The transport events are forwarded to
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    pub fn is_running(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).running
    }

    /// Register a listener under a unique name; last write wins
    ///
    /// Listeners added while the bus is running receive events but no
    /// retroactive `start` call.
    pub fn add_listener(&self, name: impl Into<String>, listener: Arc<dyn EventListener>) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        map.insert(name.into(), listener);
    }

    /// Remove a listener; removing an absent name is a no-op
    pub fn remove_listener(&self, name: &str) {
        let mut map = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        map.remove(name);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Start the bus: listeners first, then the dispatch task
    ///
    /// No-op while already running, so a second call cannot spawn a
    /// duplicate task or re-run listener `start` hooks.
    pub async fn start(&self) {
        {
            let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if state.running {
                return;
            }
        }

        // Start lifecycle-aware listeners sequentially; a failing hook
        // is logged and isolated, it does not abort bus startup
        for (name, listener) in snapshot(&self.listeners) {
            if let Err(e) = listener.start().await {
                warn!(listener = %name, error = %e, "listener start failed");
            }
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(dispatch_loop(
            rx,
            cancel.clone(),
            Arc::clone(&self.listeners),
        ));

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.queue = Some(tx);
        state.cancel = cancel;
        state.task = Some(task);
        state.running = true;
    }

    /// Emit one event
    ///
    /// Stamps `trace_id`/`span_id` from the ambient OpenTelemetry span
    /// when one is active, forwards to the transport inline (delivery
    /// failures stay inside the transport), then queues the event for
    /// listener fan-out. Never blocks on listener execution.
    ///
    /// While the bus is stopped the fan-out leg is dropped with a
    /// diagnostic; the transport leg still runs.
    pub async fn emit(&self, mut event: Event) {
        stamp_trace_context(&mut event);

        self.transport.send(&event).await;

        let queue = {
            let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.queue.clone()
        };
        match queue {
            Some(tx) => {
                // Fails only if the dispatch task already went away
                if tx.send(event).is_err() {
                    debug!("dispatch queue closed, dropping event for listeners");
                }
            }
            None => debug!("bus is stopped, dropping event for listeners"),
        }
    }

    /// Stop the bus: drain, then cancel, then stop listeners
    ///
    /// Two-phase shutdown: dropping the queue sender lets the dispatch
    /// task drain the backlog and exit on its own within
    /// [`DRAIN_GRACE`]; past that the task is cancelled (remaining
    /// events are discarded, with a diagnostic) and past
    /// [`CANCEL_GRACE`] aborted outright. Every listener `stop` hook
    /// then gets its own [`LISTENER_STOP_GRACE`], so one slow listener
    /// cannot block the others. Bounded wall-clock, never a hang.
    pub async fn stop(&self) {
        let (task, cancel) = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if !state.running {
                return;
            }
            state.running = false;
            // Dropping the sender closes the queue; the dispatch task
            // drains what is left and exits on its own
            state.queue = None;
            (state.task.take(), state.cancel.clone())
        };

        if let Some(mut task) = task {
            if tokio::time::timeout(DRAIN_GRACE, &mut task).await.is_err() {
                warn!("queue drain exceeded grace period, cancelling dispatch");
                cancel.cancel();
                if tokio::time::timeout(CANCEL_GRACE, &mut task).await.is_err() {
                    warn!("dispatch task ignored cancellation, aborting");
                    task.abort();
                }
            }
        }

        // Stop listeners last, each isolated under its own deadline
        for (name, listener) in snapshot(&self.listeners) {
            match tokio::time::timeout(LISTENER_STOP_GRACE, listener.stop()).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!(listener = %name, error = %e, "listener stop failed"),
                Err(_) => warn!(listener = %name, "timeout stopping listener"),
            }
        }
    }
}

impl Default for AsyncEventBus {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Clone the registry so dispatch never holds the lock across awaits
fn snapshot(listeners: &Arc<RwLock<ListenerMap>>) -> Vec<(String, Arc<dyn EventListener>)> {
    let map = listeners.read().unwrap_or_else(|e| e.into_inner());
    map.iter()
        .map(|(name, listener)| (name.clone(), Arc::clone(listener)))
        .collect()
}

/// Copy ambient span identifiers onto the event, if a span is active
fn stamp_trace_context(event: &mut Event) {
    let cx = opentelemetry::Context::current();
    let span = cx.span();
    let span_context = span.span_context();
    if span_context.is_valid() {
        if event.trace_id.is_none() {
            event.trace_id = Some(span_context.trace_id().to_string());
        }
        if event.span_id.is_none() {
            event.span_id = Some(span_context.span_id().to_string());
        }
    }
}

/// The single background dispatch task
///
/// Runs until the queue closes (normal stop, after draining) or the
/// token fires (forced stop past the drain grace).
async fn dispatch_loop(
    mut queue: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
    listeners: Arc<RwLock<ListenerMap>>,
) {
    loop {
        tokio::select! {
            maybe = queue.recv() => match maybe {
                Some(event) => dispatch_event(&event, &listeners).await,
                // Sender dropped and backlog drained: normal shutdown
                None => break,
            },
            _ = cancel.cancelled() => {
                let mut discarded = 0usize;
                while queue.try_recv().is_ok() {
                    discarded += 1;
                }
                if discarded > 0 {
                    warn!(discarded, "dispatch cancelled with events still queued");
                }
                break;
            }
        }
    }
}

/// Fan one event out to every listener and wait for all of them
///
/// Each listener runs as its own task: an error or panic in one is
/// logged and cannot reach the others. Events stay ordered because the
/// loop only takes the next event after this returns.
async fn dispatch_event(event: &Event, listeners: &Arc<RwLock<ListenerMap>>) {
    let mut handles = Vec::new();
    for (name, listener) in snapshot(listeners) {
        let event = event.clone();
        handles.push((
            name,
            tokio::spawn(async move { listener.handle_event(&event).await }),
        ));
    }

    for (name, handle) in handles {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(listener = %name, error = %e, "listener failed"),
            Err(e) if e.is_panic() => warn!(listener = %name, "listener panicked"),
            Err(_) => {}
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;

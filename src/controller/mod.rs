// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Live search controller: keystrokes in, at most one search in flight.
//!
//! ```text
//!            input(non-blank)            debounce elapsed          backend returns
//!   Idle ────────────────────▶ Typing ────────────────────▶ Searching ──────────────▶ Success / Failed
//!    ▲                           │  ▲                          │
//!    │ clear() / input(blank)    │  └──── input(non-blank) ────┘  (cancels the request)
//!    └───────────────────────────┴──────────────────────────────────────────────────
//! ```
//!
//! Every input, clear or retry bumps the snapshot's `generation` and cancels the
//! pending search through its `CancellationToken`. The search task commits a
//! phase only if the published generation still equals its own, and the check
//! runs inside the watch channel's lock, so a superseded request can never
//! overwrite newer state no matter when it finishes.
//!
//! `subscribe()` gives the latest state and may skip states published back to
//! back. `transitions()` delivers every one of them, in order.
//!
//! The controller spawns onto the ambient tokio runtime; create and drive it
//! from inside one.

mod backend;
mod state;

pub use backend::{LocalBackend, SearchBackend, DEFAULT_OFFLOAD_THRESHOLD};
pub use state::{SearchPhase, SearchSnapshot, SearchView};

use crate::config::Config;
use crate::error::SearchError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Default quiet period before a search fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1500);

/// Default limit on a single backend call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transitions buffered for a slow `transitions()` reader before it lags.
const TRANSITION_BUFFER: usize = 64;

/// The search task currently armed (debouncing or in flight).
struct PendingSearch {
    generation: u64,
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// Drives one search bar.
///
/// Owns the current query and the single pending search. UI code feeds it
/// `input`/`clear`/`retry` and renders whatever `subscribe()` publishes.
/// Dropping the controller cancels the pending search.
pub struct SearchController {
    backend: Arc<dyn SearchBackend>,
    debounce: Duration,
    timeout: Duration,
    state: Arc<Publisher>,
    query: String,
    pending: Option<PendingSearch>,
}

impl SearchController {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            debounce: DEFAULT_DEBOUNCE,
            timeout: DEFAULT_TIMEOUT,
            state: Arc::new(Publisher::new()),
            query: String::new(),
            pending: None,
        }
    }

    /// Debounce and timeout taken from `config`.
    pub fn from_config(backend: Arc<dyn SearchBackend>, config: &Config) -> Self {
        Self::new(backend)
            .with_debounce(config.controller.debounce())
            .with_timeout(config.remote.timeout())
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Watch every state the controller publishes.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.state.latest.subscribe()
    }

    /// Every state published from now on, none collapsed.
    pub fn transitions(&self) -> broadcast::Receiver<SearchSnapshot> {
        self.state.log.subscribe()
    }

    /// Current state.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.state.latest.borrow().clone()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Is a search debouncing or in flight?
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.task.is_finished())
    }

    /// The input box now holds `text`.
    ///
    /// Cancels whatever is pending. Blank text goes straight to Idle; anything
    /// else waits out the debounce window and then searches.
    pub fn input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cancel_pending();

        let blank = text.trim().is_empty();
        let phase = if blank { SearchPhase::Idle } else { SearchPhase::Typing };
        let generation = self.publish(text.clone(), phase);
        self.query = text;

        if blank {
            tracing::debug!(generation, "blank query, idle");
            return;
        }
        self.arm(generation, self.debounce);
    }

    /// Empty the input box. Synchronous: the state is Idle when this returns.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.query.clear();
        let generation = self.publish(String::new(), SearchPhase::Idle);
        tracing::debug!(generation, "cleared");
    }

    /// Search the current query again, now, without debouncing.
    ///
    /// Returns `false` (and does nothing) when the query is blank.
    pub fn retry(&mut self) -> bool {
        if self.query.trim().is_empty() {
            return false;
        }
        self.cancel_pending();
        let generation = self.publish(self.query.clone(), SearchPhase::Typing);
        self.arm(generation, Duration::ZERO);
        true
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            if !pending.task.is_finished() {
                tracing::debug!(generation = pending.generation, "cancelling superseded search");
            }
            pending.token.cancel();
        }
    }

    fn publish(&self, query: String, phase: SearchPhase) -> u64 {
        self.state.start(query, phase)
    }

    fn arm(&mut self, generation: u64, delay: Duration) {
        let token = CancellationToken::new();
        let job = SearchJob {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
            token: token.clone(),
            generation,
            query: self.query.clone(),
            delay,
            timeout: self.timeout,
        };
        let task = tokio::spawn(job.run());
        self.pending = Some(PendingSearch {
            generation,
            token,
            task,
        });
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Everything one debounced search needs, moved into its task.
struct SearchJob {
    backend: Arc<dyn SearchBackend>,
    state: Arc<Publisher>,
    token: CancellationToken,
    generation: u64,
    query: String,
    delay: Duration,
    timeout: Duration,
}

impl SearchJob {
    async fn run(self) {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => return,
            _ = tokio::time::sleep(self.delay) => {}
        }

        if !self.state.commit(self.generation, SearchPhase::Searching) {
            return;
        }
        tracing::debug!(
            generation = self.generation,
            query = %self.query,
            backend = self.backend.name(),
            "search issued"
        );

        let outcome = tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                tracing::debug!(generation = self.generation, "search abandoned");
                return;
            }
            outcome = tokio::time::timeout(self.timeout, self.backend.search(&self.query)) => outcome,
        };

        let phase = match outcome {
            Ok(Ok(items)) => {
                tracing::debug!(generation = self.generation, results = items.len(), "search finished");
                SearchPhase::Success(items)
            }
            Ok(Err(error)) => self.failed(error),
            Err(_) => self.failed(SearchError::Timeout(self.timeout)),
        };

        if self.token.is_cancelled() {
            return;
        }
        if !self.state.commit(self.generation, phase) {
            tracing::debug!(generation = self.generation, "stale completion dropped");
        }
    }

    fn failed(&self, error: SearchError) -> SearchPhase {
        tracing::warn!(
            generation = self.generation,
            query = %self.query,
            backend = self.backend.name(),
            error = %error,
            "search failed"
        );
        SearchPhase::Failed(error.user_message())
    }
}

/// Where snapshots go: the latest value, plus an ordered log of all of them.
///
/// Log sends happen under the watch lock, so the log order is the commit order.
struct Publisher {
    latest: watch::Sender<SearchSnapshot>,
    log: broadcast::Sender<SearchSnapshot>,
}

impl Publisher {
    fn new() -> Self {
        let (latest, _) = watch::channel(SearchSnapshot::default());
        let (log, _) = broadcast::channel(TRANSITION_BUFFER);
        Self { latest, log }
    }

    /// Start a new generation with `phase`, returning its number.
    fn start(&self, query: String, phase: SearchPhase) -> u64 {
        let mut generation = 0;
        self.latest.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.query = query;
            snapshot.phase = phase;
            generation = snapshot.generation;
            // No log readers is fine.
            let _ = self.log.send(snapshot.clone());
        });
        generation
    }

    /// Set `phase` if `generation` is still the published one.
    ///
    /// Runs under the channel's lock, so it cannot interleave with `start`.
    fn commit(&self, generation: u64, phase: SearchPhase) -> bool {
        self.latest.send_if_modified(|snapshot| {
            if snapshot.generation != generation {
                return false;
            }
            snapshot.phase = phase;
            let _ = self.log.send(snapshot.clone());
            true
        })
    }
}

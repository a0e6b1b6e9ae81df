// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the controller sends its queries.

use crate::error::SearchError;
use crate::index::SearchIndex;
use crate::options::SearchOptions;
use crate::types::SearchItem;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// Default size above which `LocalBackend` leaves the async executor.
pub const DEFAULT_OFFLOAD_THRESHOLD: usize = 5_000;

/// A source of search results for the live search bar.
///
/// Implementations may take arbitrarily long; the controller wraps every
/// call in a timeout and drops the future when the search is superseded.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError>;

    /// Short label used in log events.
    fn name(&self) -> &'static str {
        "backend"
    }
}

/// Searches an in-memory `SearchIndex`.
///
/// The index sits behind a `RwLock` so the owner can keep adding items while
/// searches run. Big indexes are queried on tokio's blocking pool so scoring
/// never stalls the executor.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    index: Arc<RwLock<SearchIndex>>,
    options: SearchOptions,
    offload_threshold: usize,
}

impl LocalBackend {
    pub fn new(index: SearchIndex, options: SearchOptions) -> Self {
        Self::shared(Arc::new(RwLock::new(index)), options)
    }

    /// Use an index the caller keeps a handle to.
    pub fn shared(index: Arc<RwLock<SearchIndex>>, options: SearchOptions) -> Self {
        Self {
            index,
            options,
            offload_threshold: DEFAULT_OFFLOAD_THRESHOLD,
        }
    }

    pub fn with_offload_threshold(mut self, threshold: usize) -> Self {
        self.offload_threshold = threshold;
        self
    }

    pub fn index(&self) -> &Arc<RwLock<SearchIndex>> {
        &self.index
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}

fn run_local(index: &RwLock<SearchIndex>, query: &str, options: &SearchOptions) -> Vec<SearchItem> {
    index
        .read()
        .search(query, options)
        .into_iter()
        .cloned()
        .collect()
}

#[async_trait]
impl SearchBackend for LocalBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        let size = self.index.read().len();
        if size <= self.offload_threshold {
            return Ok(run_local(&self.index, query, &self.options));
        }

        let index = Arc::clone(&self.index);
        let options = self.options.clone();
        let query = query.to_string();
        tokio::task::spawn_blocking(move || run_local(&index, &query, &options))
            .await
            .map_err(|e| SearchError::Backend(format!("search task failed: {}", e)))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

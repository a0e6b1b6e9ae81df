//! Fuzzy search index and live-search controller for the Postgrado UNERG repository.
//!
//! Two pieces work together:
//!
//! - [`SearchIndex`]: an in-memory collection of [`SearchItem`]s answering ranked
//!   substring, fuzzy (Levenshtein) and prefix queries over chosen fields.
//! - [`SearchController`]: turns keystrokes into at most one in-flight search,
//!   with debouncing, cancellation of superseded requests, and a published
//!   Idle/Typing/Searching/Success/Failed state. It searches through a
//!   [`SearchBackend`]: the local index ([`LocalBackend`]) or the repository's
//!   HTTP API ([`RemoteBackend`]).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   utils.rs  │────▶│  scoring/    │────▶│  index.rs   │
//! │ (tokenize,  │     │ (passes,     │     │ (SearchIndex│
//! │  normalize) │     │  ranking)    │     │  search)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   ▲                    │
//!        ▼                   │                    ▼
//! ┌─────────────┐            │             ┌─────────────┐     ┌─────────────┐
//! │  fuzzy/     │────────────┘             │ controller/ │◀────│  remote.rs  │
//! │ (levenshtein│                          │ (debounce,  │     │ (HTTP API)  │
//! │  bounds)    │                          │  cancel)    │     └─────────────┘
//! └─────────────┘                          └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use unerg_search::{SearchIndex, SearchItem, SearchOptions};
//!
//! let mut index = SearchIndex::new();
//! index.add_item(SearchItem::new("Redes neuronales").field("author", "Ana Gómez"));
//! index.add_item(SearchItem::new("Energía solar"));
//!
//! let results = index.search("redes", &SearchOptions::default());
//! assert_eq!(results.len(), 1);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod fuzzy;
mod index;
pub mod options;
pub mod remote;
pub mod scoring;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::Config;
pub use controller::{
    LocalBackend, SearchBackend, SearchController, SearchPhase, SearchSnapshot, SearchView,
};
pub use error::SearchError;
pub use fuzzy::{levenshtein, max_edit_distance, within_distance};
pub use index::SearchIndex;
pub use options::{FuzzyMode, SearchOptions};
pub use remote::RemoteBackend;
pub use scoring::ranking::ScoredItem;
pub use types::{FieldRef, FieldValue, ItemId, SearchItem, TITLE_FIELD};
pub use utils::{normalize, tokenize};

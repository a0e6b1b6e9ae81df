// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for search backends.
//!
//! The local index never fails; these errors only come out of a backend call
//! made by the controller. Cancellation is not an error: a superseded request
//! is dropped without producing one.

use std::time::Duration;
use thiserror::Error;

/// Why a backend search failed.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Connection refused, DNS failure, TLS failure, body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected envelope.
    #[error("malformed response: {0}")]
    MalformedEnvelope(String),

    /// No answer within the configured timeout.
    #[error("search timed out after {0:?}")]
    Timeout(Duration),

    /// Failure reported by a custom backend.
    #[error("{0}")]
    Backend(String),
}

impl SearchError {
    /// Text shown in the search bar's error panel.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Network(_) => {
                "Search failed: could not reach the server. Check your connection and try again."
                    .to_string()
            }
            SearchError::Status { status, .. } => {
                format!("Search failed: the server responded with status {}.", status)
            }
            SearchError::MalformedEnvelope(_) => {
                "Search failed: the server sent an unexpected response.".to_string()
            }
            SearchError::Timeout(after) => {
                format!("Search failed: no response after {}.", human_duration(*after))
            }
            SearchError::Backend(message) => format!("Search failed: {}", message),
        }
    }
}

/// Whole seconds as `N s`, anything else in milliseconds.
fn human_duration(d: Duration) -> String {
    if d.subsec_nanos() == 0 && d.as_secs() > 0 {
        format!("{} s", d.as_secs())
    } else {
        format!("{} ms", d.as_millis())
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP search backend.
//!
//! Production searches go to the repository API: `GET <base>/<search_path>?query=...`
//! answering with an envelope such as
//!
//! ```json
//! {
//!   "success": true,
//!   "data": [
//!     {
//!       "id": 12,
//!       "title": "Gestión del agua en cuencas urbanas",
//!       "author": "María Pérez",
//!       "summary": "...",
//!       "status": "aprobado",
//!       "category": {"id": 3, "name": "Ambiente"},
//!       "period": {"id": 7, "name": "2023-I"}
//!     }
//!   ]
//! }
//! ```
//!
//! Spanish key spellings (`titulo`, `autor`, `resumen`, `estado`, `categoria`,
//! `periodo`, `nombre`) are accepted too. A non-2xx status, an undecodable body
//! or `"success": false` all fail the search.

use crate::config::RemoteConfig;
use crate::controller::SearchBackend;
use crate::error::SearchError;
use crate::types::{deserialize_id, FieldValue, ItemId, SearchItem};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Longest error body kept in `SearchError::Status`.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Response envelope of the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(alias = "results", alias = "resultados")]
    pub data: Vec<RemoteRecord>,
    #[serde(default, alias = "mensaje")]
    pub message: Option<String>,
}

/// Reference to a related entity (category, period).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: ItemId,
    #[serde(alias = "nombre")]
    pub name: String,
}

/// One search hit as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ItemId,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "autor")]
    pub author: Option<String>,
    #[serde(default, alias = "resumen")]
    pub summary: Option<String>,
    #[serde(default, alias = "estado")]
    pub status: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<NamedRef>,
    #[serde(default, alias = "periodo")]
    pub period: Option<NamedRef>,
}

impl From<RemoteRecord> for SearchItem {
    fn from(record: RemoteRecord) -> Self {
        let mut fields = BTreeMap::new();
        let mut put = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                fields.insert(name.to_string(), FieldValue::Text(value));
            }
        };
        put("author", record.author);
        put("summary", record.summary);
        put("status", record.status);
        if let Some(category) = record.category {
            put("category_id", Some(category.id.0));
            put("category", Some(category.name));
        }
        if let Some(period) = record.period {
            put("period_id", Some(period.id.0));
            put("period", Some(period.name));
        }

        SearchItem {
            id: record.id,
            title: record.title,
            fields,
        }
    }
}

/// Decode a response body into items.
pub fn parse_envelope(body: &[u8]) -> Result<Vec<SearchItem>, SearchError> {
    let envelope: SearchEnvelope =
        serde_json::from_slice(body).map_err(|e| SearchError::MalformedEnvelope(e.to_string()))?;

    if envelope.success == Some(false) {
        let message = envelope
            .message
            .unwrap_or_else(|| "backend reported failure".to_string());
        return Err(SearchError::Backend(message));
    }

    Ok(envelope.data.into_iter().map(SearchItem::from).collect())
}

/// Client for the remote search endpoint.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    http: reqwest::Client,
    endpoint: String,
    query_param: String,
    token: Option<String>,
    timeout: Duration,
}

impl RemoteBackend {
    pub fn new(config: &RemoteConfig) -> Result<Self, SearchError> {
        let timeout = config.timeout();
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: join_url(&config.base_url, &config.search_path),
            query_param: config.query_param.clone(),
            token: config.token.clone(),
            timeout,
        })
    }

    /// Full URL of the search endpoint, without the query string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        let mut request = self
            .http
            .get(&self.endpoint)
            .query(&[(self.query_param.as_str(), query)])
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let items = parse_envelope(&body)?;
        tracing::debug!(endpoint = %self.endpoint, query, results = items.len(), "remote search");
        Ok(items)
    }

    fn transport_error(&self, error: reqwest::Error) -> SearchError {
        if error.is_timeout() {
            SearchError::Timeout(self.timeout)
        } else {
            SearchError::Network(error)
        }
    }
}

#[async_trait]
impl SearchBackend for RemoteBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        self.fetch(query).await
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

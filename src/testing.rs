//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::controller::SearchBackend;
use crate::error::SearchError;
use crate::types::SearchItem;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Create an item with the three default search fields filled in.
pub fn make_item(id: &str, title: &str, description: &str, content: &str) -> SearchItem {
    SearchItem::with_id(id, title)
        .field("description", description)
        .field("content", content)
}

/// A small postgraduate repository: theses with authors and categories.
pub fn sample_theses() -> Vec<SearchItem> {
    vec![
        make_item(
            "t1",
            "Desarrollo de una aplicación móvil para el control de inventario",
            "Aplicación Android para pequeñas empresas",
            "Se diseñó una aplicación con sincronización fuera de línea y lectura de códigos de barra.",
        )
        .field("author", "María Pérez")
        .field("category", "Informática"),
        make_item(
            "t2",
            "Gestión del agua en cuencas urbanas",
            "Modelo de gestión participativa",
            "Estudio de caso en la cuenca del río Guárico con indicadores de calidad del agua.",
        )
        .field("author", "José Rodríguez")
        .field("category", "Ambiente"),
        make_item(
            "t3",
            "Redes neuronales aplicadas al diagnóstico agrícola",
            "Clasificación de enfermedades en cultivos de maíz",
            "Se entrenaron redes convolucionales con imágenes de hojas de maíz.",
        )
        .field("author", "Ana Gómez")
        .field("category", "Informática"),
        make_item(
            "t4",
            "Estrategias didácticas para la enseñanza de la matemática",
            "Propuesta para educación media",
            "La investigación aplicó estrategias lúdicas en liceos de San Juan de los Morros.",
        )
        .field("author", "Carlos Díaz")
        .field("category", "Educación"),
        make_item(
            "t5",
            "Energía solar fotovoltaica en zonas rurales",
            "Dimensionamiento de sistemas aislados",
            "Se evaluaron paneles solares y baterías para escuelas rurales.",
        )
        .field("author", "Luisa Fernández")
        .field("category", "Ingeniería")
        .field("year", 2022.0),
    ]
}

/// Backend with scripted latency and failures, recording every query it sees.
///
/// Successful searches return one item whose id is the query itself, so tests
/// can tell which request produced the displayed results.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    calls: Mutex<Vec<String>>,
    delay: Duration,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    empty: HashSet<String>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latency of every call without a specific delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Latency for one query.
    pub fn with_delay_for(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// This query fails after its delay.
    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    /// This query succeeds with no results.
    pub fn empty_on(mut self, query: &str) -> Self {
        self.empty.insert(query.to_string());
        self
    }

    /// Queries received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SearchBackend for ScriptedBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        self.calls.lock().push(query.to_string());

        let delay = self.delays.get(query).copied().unwrap_or(self.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(query) {
            return Err(SearchError::Backend(format!("scripted failure for '{}'", query)));
        }
        if self.empty.contains(query) {
            return Ok(Vec::new());
        }
        Ok(vec![SearchItem::with_id(query, format!("Result for {}", query))])
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

//! Ordered fallback across several stores.

use crate::connection::{
    domain::{ConnectionId, ConnectionProfile},
    ports::{ConnectionStore, ConnectionStoreResult},
};
use std::fmt;
use tracing::debug;

type Layer = Box<dyn ConnectionStore>;

/// Consults each layer in order; the first layer holding the id wins.
///
/// A backend failure in any consulted layer stops the search and is
/// returned as-is.
#[derive(Default)]
pub struct LayeredConnectionStore {
    layers: Vec<(String, Layer)>,
}

impl LayeredConnectionStore {
    /// Creates a store with no layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named layer, consulted after every earlier layer.
    #[must_use]
    pub fn with_layer(mut self, name: impl Into<String>, store: impl ConnectionStore + 'static) -> Self {
        self.push(name, store);
        self
    }

    /// Appends a named layer in place.
    pub fn push(&mut self, name: impl Into<String>, store: impl ConnectionStore + 'static) {
        self.layers.push((name.into(), Box::new(store)));
    }

    /// Returns layer names in lookup order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|(name, _)| name.as_str())
    }
}

impl fmt::Debug for LayeredConnectionStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LayeredConnectionStore")
            .field("layers", &self.layer_names().collect::<Vec<_>>())
            .finish()
    }
}

impl ConnectionStore for LayeredConnectionStore {
    fn find(&self, id: &ConnectionId) -> ConnectionStoreResult<Option<ConnectionProfile>> {
        for (name, layer) in &self.layers {
            if let Some(profile) = layer.find(id)? {
                debug!(connection_id = %id, layer = %name, "connection resolved");
                return Ok(Some(profile));
            }
        }
        Ok(None)
    }
}

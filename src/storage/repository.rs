//! In-memory shipment repository.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Shipment, ShipmentDraft};
use crate::error::{ShipmentError, ShipmentResult};

/// Repository holding every shipment for the lifetime of the process.
///
/// Clones share the same underlying map; `ShipmentRepository::new()` always
/// starts from an empty, independent store.
#[derive(Debug, Clone, Default)]
pub struct ShipmentRepository {
    shipments: Arc<RwLock<HashMap<String, Shipment>>>,
}

impl ShipmentRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new shipment under its id.
    pub async fn insert(&self, shipment: Shipment) {
        let mut guard = self.shipments.write().await;
        guard.insert(shipment.id.clone(), shipment);
    }

    /// Get a shipment by id.
    pub async fn get(&self, id: &str) -> ShipmentResult<Shipment> {
        let guard = self.shipments.read().await;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| ShipmentError::ShipmentNotFound(id.to_string()))
    }

    /// List all shipments. Order is unspecified.
    pub async fn list(&self) -> Vec<Shipment> {
        let guard = self.shipments.read().await;
        guard.values().cloned().collect()
    }

    /// Overwrite the mutable fields of an existing shipment.
    pub async fn update(&self, id: &str, draft: ShipmentDraft) -> ShipmentResult<Shipment> {
        let mut guard = self.shipments.write().await;
        let shipment = guard
            .get_mut(id)
            .ok_or_else(|| ShipmentError::ShipmentNotFound(id.to_string()))?;

        shipment.apply(draft);

        Ok(shipment.clone())
    }

    /// Delete a shipment.
    pub async fn delete(&self, id: &str) -> ShipmentResult<()> {
        let mut guard = self.shipments.write().await;
        guard
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ShipmentError::ShipmentNotFound(id.to_string()))
    }

    /// Number of stored shipments.
    pub async fn count(&self) -> usize {
        self.shipments.read().await.len()
    }
}

use crate::{DomainError, Shipment, TrackingUpdate};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Trait que define la persistencia de albaranes usada por el workflow de
/// envíos. Las escrituras se aplican registro a registro.
pub trait ShipmentRepository: Send + Sync {
    /// Guarda (inserta o reemplaza) un albarán y devuelve su `Uuid`.
    fn save_shipment(&self, shipment: Shipment) -> Result<Uuid, DomainError>;

    /// Recupera un albarán por su `Uuid`.
    fn get_shipment(&self, id: &Uuid) -> Result<Option<Shipment>, DomainError>;

    /// Lista todos los albaranes en orden de código.
    fn list_shipments(&self) -> Result<Vec<Shipment>, DomainError>;

    /// Escribe los datos de seguimiento de un envío confirmado.
    fn write_tracking(&self, id: &Uuid, update: TrackingUpdate) -> Result<(), DomainError>;

    /// Marca como impresos los albaranes indicados.
    fn mark_printed(&self, ids: &[Uuid]) -> Result<(), DomainError>;
}

/// Implementación en memoria para tests y desarrollo.
pub struct InMemoryShipmentRepository {
    shipments: Arc<Mutex<HashMap<Uuid, Shipment>>>,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self { shipments: Arc::new(Mutex::new(HashMap::new())) }
    }

    // Helper to map poisoned mutex errors into DomainError
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Shipment>>, DomainError> {
        self.shipments
            .lock()
            .map_err(|e| DomainError::StorageError(format!("Mutex 'shipments' poisoned: {}", e)))
    }
}

impl Default for InMemoryShipmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipmentRepository for InMemoryShipmentRepository {
    fn save_shipment(&self, shipment: Shipment) -> Result<Uuid, DomainError> {
        let id = shipment.id;
        self.lock()?.insert(id, shipment);
        Ok(id)
    }

    fn get_shipment(&self, id: &Uuid) -> Result<Option<Shipment>, DomainError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn list_shipments(&self) -> Result<Vec<Shipment>, DomainError> {
        let mut all: Vec<Shipment> = self.lock()?.values().cloned().collect();
        all.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(all)
    }

    fn write_tracking(&self, id: &Uuid, update: TrackingUpdate) -> Result<(), DomainError> {
        let mut shipments = self.lock()?;
        let shipment = shipments.get_mut(id)
                                .ok_or_else(|| DomainError::NotFound(format!("shipment {}", id)))?;
        shipment.apply_tracking(&update);
        Ok(())
    }

    fn mark_printed(&self, ids: &[Uuid]) -> Result<(), DomainError> {
        let mut shipments = self.lock()?;
        // Validar todos antes de escribir para no dejar el lote a medias.
        if let Some(missing) = ids.iter().find(|id| !shipments.contains_key(id)) {
            return Err(DomainError::NotFound(format!("shipment {}", missing)));
        }
        for id in ids {
            if let Some(shipment) = shipments.get_mut(id) {
                shipment.carrier_printed = true;
            }
        }
        Ok(())
    }
}

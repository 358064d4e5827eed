// api.rs
//
// Operaciones de la API de Correos que no son envíos: prueba de conexión y
// manifiesto.
use crate::errors::WorkflowError;
use crate::shipper::CorreosShipper;
use chrono::NaiveDate;
use correos_provider::{PickingConnector, PickingSession};

impl<C> CorreosShipper<C> where C: PickingConnector
{
  /// Prueba la conexión con Correos y devuelve el mensaje recibido.
  pub fn test_correos(&self) -> Result<String, WorkflowError> {
    let mut session = self.open_session()?;
    let message = session.test_connection()?;
    session.finish();
    log::info!(target: "correos", "Test connection: {}", message);
    Ok(message)
  }

  /// Correos no ofrece manifiesto de envíos: siempre falla.
  pub fn get_manifest_correos(&self, _from_date: NaiveDate, _to_date: NaiveDate) -> Result<Vec<u8>, WorkflowError> {
    Err(WorkflowError::ManifestUnavailable)
  }
}

// shipper.rs
//
// `CorreosShipper` agrupa los colaboradores que necesitan las operaciones
// del workflow: configuración de la API, conector de Correos, repositorio
// de albaranes, contexto del lote y observador. Las operaciones viven en
// `sender.rs`, `printer.rs` y `api.rs`.
use crate::config::SendContext;
use crate::errors::WorkflowError;
use crate::labels::LabelWriter;
use crate::observer::{LogObserver, SendObserver};
use correos_provider::{Credentials, PickingConnector, ScopedSession};
use serde::{Deserialize, Serialize};
use shipping_domain::{CarrierApiConfig, ShipmentRepository};
use std::path::PathBuf;
use std::sync::Arc;

/// Resultado de un lote de envíos. No se persiste.
///
/// - `references`: códigos de los albaranes registrados, en orden de entrada.
/// - `labels`: rutas de las etiquetas descargadas, en orden de entrada.
/// - `errors`: problemas encontrados, en orden de aparición.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendReport {
  pub references: Vec<String>,
  pub labels: Vec<PathBuf>,
  pub errors: Vec<crate::issues::ShipmentIssue>,
}

impl SendReport {
  /// Mensajes de error listos para mostrar al usuario.
  pub fn error_messages(&self) -> Vec<String> {
    self.errors.iter().map(|e| e.to_string()).collect()
  }

  /// Tupla `(referencias, etiquetas, errores)`.
  pub fn into_parts(self) -> (Vec<String>, Vec<PathBuf>, Vec<String>) {
    let messages = self.error_messages();
    (self.references, self.labels, messages)
  }
}

pub struct CorreosShipper<C>
  where C: PickingConnector
{
  pub(crate) api: CarrierApiConfig,
  pub(crate) connector: C,
  pub(crate) repo: Arc<dyn ShipmentRepository>,
  pub(crate) context: SendContext,
  pub(crate) observer: Arc<dyn SendObserver>,
  pub(crate) labels: LabelWriter,
}

impl<C> CorreosShipper<C> where C: PickingConnector
{
  /// Crea el shipper con el `LogObserver` por defecto.
  pub fn new(api: CarrierApiConfig, connector: C, repo: Arc<dyn ShipmentRepository>, context: SendContext) -> Self {
    let labels = LabelWriter::new(&context);
    Self { api, connector, repo, context, observer: Arc::new(LogObserver), labels }
  }

  /// Sustituye el observador de eventos.
  pub fn with_observer(mut self, observer: Arc<dyn SendObserver>) -> Self {
    self.observer = observer;
    self
  }

  pub(crate) fn credentials(&self) -> Result<Credentials, WorkflowError> {
    let code = self.api
                   .correos_code
                   .clone()
                   .filter(|c| !c.trim().is_empty())
                   .ok_or_else(|| WorkflowError::Config("Correos code (CodeEtiquetador) not configured".into()))?;
    self.api.validate()?;
    Ok(Credentials { username: self.api.username.clone(),
                     password: self.api.password.clone(),
                     code,
                     timeout: self.api.timeout,
                     debug: self.api.debug })
  }

  /// Abre la sesión del lote. Se cierra al salir del ámbito del llamador.
  pub(crate) fn open_session(&self) -> Result<ScopedSession<C::Session>, WorkflowError> {
    let credentials = self.credentials()?;
    Ok(ScopedSession::open(&self.connector, &credentials)?)
  }
}

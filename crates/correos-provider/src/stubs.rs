// Archivo: stubs.rs
// Propósito: conector en memoria que simula a Correos para pruebas y demos.
//
// Las respuestas se guionizan por adelantado; cuando la cola está vacía se
// genera un envío aceptado con referencia correlativa y una etiqueta PDF
// mínima. El estado es compartido entre el conector y sus sesiones para
// poder inspeccionarlo después de cerrar.
use crate::errors::ProviderError;
use crate::payload::PickingPayload;
use crate::session::{CreateResponse, Credentials, PickingConnector, PickingSession};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

/// Contenido de las etiquetas generadas por el sandbox.
pub const SANDBOX_LABEL: &[u8] = b"%PDF-1.4\n% correos sandbox label\n%%EOF\n";

#[derive(Debug, Default)]
struct SandboxState {
  responses: VecDeque<Result<CreateResponse, ProviderError>>,
  labels: HashMap<String, String>,
  label_failures: VecDeque<ProviderError>,
  created: Vec<PickingPayload>,
  label_requests: Vec<String>,
  connect_error: Option<ProviderError>,
  connects: usize,
  closes: usize,
  sequence: u32,
}

/// Conector simulado de Correos.
#[derive(Debug, Clone, Default)]
pub struct SandboxPicking {
  state: Arc<Mutex<SandboxState>>,
}

impl SandboxPicking {
  pub fn new() -> Self {
    Self::default()
  }

  fn state(&self) -> MutexGuard<'_, SandboxState> {
    self.state.lock().unwrap_or_else(|e| e.into_inner())
  }

  /// Encola la respuesta del siguiente `create`.
  pub fn push_response(&self, response: CreateResponse) -> &Self {
    self.state().responses.push_back(Ok(response));
    self
  }

  /// Encola un fallo de transporte para el siguiente `create`.
  pub fn push_failure(&self, error: ProviderError) -> &Self {
    self.state().responses.push_back(Err(error));
    self
  }

  /// Registra una etiqueta (base64) disponible para `reference`.
  pub fn with_label(&self, reference: &str, label_b64: &str) -> &Self {
    self.state().labels.insert(reference.to_string(), label_b64.to_string());
    self
  }

  /// Encola un fallo de transporte para el siguiente `label`.
  pub fn push_label_failure(&self, error: ProviderError) -> &Self {
    self.state().label_failures.push_back(error);
    self
  }

  /// Hace fallar las próximas conexiones.
  pub fn refuse_connections(&self, error: ProviderError) -> &Self {
    self.state().connect_error = Some(error);
    self
  }

  /// Payloads recibidos por `create`, en orden.
  pub fn created(&self) -> Vec<PickingPayload> {
    self.state().created.clone()
  }

  /// Referencias pedidas a `label`, en orden.
  pub fn label_requests(&self) -> Vec<String> {
    self.state().label_requests.clone()
  }

  pub fn connects(&self) -> usize {
    self.state().connects
  }

  pub fn closes(&self) -> usize {
    self.state().closes
  }
}

impl PickingConnector for SandboxPicking {
  type Session = SandboxSession;

  fn connect(&self, credentials: &Credentials) -> Result<SandboxSession, ProviderError> {
    let mut state = self.state();
    if let Some(err) = state.connect_error.clone() {
      return Err(err);
    }
    if credentials.username.is_empty() {
      return Err(ProviderError::Authentication("usuario vacío".into()));
    }
    state.connects += 1;
    Ok(SandboxSession { state: self.state.clone() })
  }
}

/// Sesión del sandbox.
#[derive(Debug)]
pub struct SandboxSession {
  state: Arc<Mutex<SandboxState>>,
}

impl SandboxSession {
  fn state(&self) -> MutexGuard<'_, SandboxState> {
    self.state.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl PickingSession for SandboxSession {
  fn create(&mut self, data: &PickingPayload) -> Result<CreateResponse, ProviderError> {
    let mut state = self.state();
    state.created.push(data.clone());
    let response = match state.responses.pop_front() {
      Some(scripted) => scripted?,
      None => {
        state.sequence += 1;
        let reference = format!("PQSBX{:08}", state.sequence);
        CreateResponse { reference: Some(reference), label: Some(STANDARD.encode(SANDBOX_LABEL)), error: None }
      }
    };
    if let (Some(reference), Some(label)) = (response.reference(), response.label()) {
      let (reference, label) = (reference.to_string(), label.to_string());
      state.labels.insert(reference, label);
    }
    Ok(response)
  }

  fn label(&mut self, reference: &str) -> Result<Option<String>, ProviderError> {
    let mut state = self.state();
    state.label_requests.push(reference.to_string());
    if let Some(err) = state.label_failures.pop_front() {
      return Err(err);
    }
    Ok(state.labels.get(reference).cloned())
  }

  fn test_connection(&mut self) -> Result<String, ProviderError> {
    Ok("Conexión con Correos (sandbox) correcta".to_string())
  }

  fn close(&mut self) {
    self.state().closes += 1;
  }
}

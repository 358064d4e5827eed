// session.rs
//
// Contrato con el cliente de Correos. El cliente real (SOAP, autenticación,
// reintentos) es externo; el workflow sólo conoce estos traits.
use crate::errors::ProviderError;
use crate::payload::PickingPayload;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Parámetros de conexión con Correos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
  /// Código etiquetador.
  pub code: String,
  /// Timeout por petición, en segundos.
  pub timeout: u64,
  pub debug: bool,
}

/// Respuesta de un preregistro. Los tres campos son independientes: un envío
/// puede quedar registrado sin etiqueta y, aun así, traer un error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
  pub reference: Option<String>,
  /// Etiqueta en base64.
  pub label: Option<String>,
  pub error: Option<String>,
}

impl CreateResponse {
  pub fn new(reference: Option<&str>, label: Option<&str>, error: Option<&str>) -> Self {
    Self { reference: reference.map(str::to_string),
           label: label.map(str::to_string),
           error: error.map(str::to_string) }
  }

  pub fn reference(&self) -> Option<&str> {
    non_empty(self.reference.as_deref())
  }

  pub fn label(&self) -> Option<&str> {
    non_empty(self.label.as_deref())
  }

  pub fn error(&self) -> Option<&str> {
    non_empty(self.error.as_deref())
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}

/// Sesión abierta con Correos. Todas las llamadas son bloqueantes.
pub trait PickingSession {
  /// Preregistra un envío.
  fn create(&mut self, data: &PickingPayload) -> Result<CreateResponse, ProviderError>;

  /// Etiqueta (base64) de un envío ya registrado, o `None` si no está
  /// disponible.
  fn label(&mut self, reference: &str) -> Result<Option<String>, ProviderError>;

  /// Comprueba la conexión y devuelve el mensaje de Correos.
  fn test_connection(&mut self) -> Result<String, ProviderError>;

  /// Libera la sesión. Se invoca una única vez.
  fn close(&mut self);
}

/// Fábrica de sesiones.
pub trait PickingConnector {
  type Session: PickingSession;

  fn connect(&self, credentials: &Credentials) -> Result<Self::Session, ProviderError>;
}

/// Sesión con ámbito: se abre una vez por lote y se cierra exactamente una
/// vez, ya sea con `finish` o al salir del ámbito (incluido un `?` o un
/// pánico a mitad del lote).
pub struct ScopedSession<S: PickingSession> {
  session: S,
  released: bool,
}

impl<S: PickingSession> ScopedSession<S> {
  pub fn open<C>(connector: &C, credentials: &Credentials) -> Result<Self, ProviderError>
    where C: PickingConnector<Session = S>
  {
    let session = connector.connect(credentials)?;
    log::debug!(target: "correos", "sesión abierta para {}", credentials.username);
    Ok(Self { session, released: false })
  }

  /// Cierra la sesión explícitamente.
  pub fn finish(mut self) {
    self.release();
  }

  fn release(&mut self) {
    if !self.released {
      self.released = true;
      self.session.close();
      log::debug!(target: "correos", "sesión cerrada");
    }
  }
}

impl<S: PickingSession> Deref for ScopedSession<S> {
  type Target = S;

  fn deref(&self) -> &S {
    &self.session
  }
}

impl<S: PickingSession> DerefMut for ScopedSession<S> {
  fn deref_mut(&mut self) -> &mut S {
    &mut self.session
  }
}

impl<S: PickingSession> Drop for ScopedSession<S> {
  fn drop(&mut self) {
    self.release();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_fields_count_as_absent() {
    let res = CreateResponse::new(Some(""), Some("  "), Some("boom"));
    assert_eq!(res.reference(), None);
    assert_eq!(res.label(), None);
    assert_eq!(res.error(), Some("boom"));
  }
}

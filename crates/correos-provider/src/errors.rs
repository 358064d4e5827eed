// errors.rs
use thiserror::Error;

/// Fallos "duros" del cliente de Correos: conexión, transporte o
/// autenticación. Los rechazos de negocio llegan como texto dentro de
/// `CreateResponse::error` y no pasan por aquí.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
  #[error("No se pudo conectar con Correos: {0}")]
  Connection(String),
  #[error("Error de transporte con Correos: {0}")]
  Transport(String),
  #[error("Credenciales rechazadas por Correos: {0}")]
  Authentication(String),
}

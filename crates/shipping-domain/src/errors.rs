// errors.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
  #[error("Error de validación: {0}")]
  ValidationError(String),
  #[error("Registro no encontrado: {0}")]
  NotFound(String),
  #[error("Error de almacenamiento: {0}")]
  StorageError(String),
}

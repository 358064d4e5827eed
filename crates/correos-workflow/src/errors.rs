use correos_provider::ProviderError;
use shipping_domain::DomainError;
use thiserror::Error;

// Errores que abortan una operación completa del workflow.
//
// Los problemas de un albarán concreto (falta de servicio, de país, ...) no
// son errores: se acumulan como `ShipmentIssue` en el informe del lote.
#[derive(Error, Debug)]
pub enum WorkflowError {
  /// Fallo de conexión o transporte del cliente de Correos.
  #[error("Error de Correos: {0}")]
  Provider(#[from] ProviderError),

  /// Errores originados al leer o escribir albaranes.
  #[error("Error de dominio: {0}")]
  Domain(#[from] DomainError),

  /// La etiqueta recibida no es base64 válido.
  #[error("Etiqueta corrupta para la referencia {reference}: {source}")]
  LabelDecode {
    reference: String,
    #[source]
    source: base64::DecodeError,
  },

  /// Error al escribir el fichero temporal de la etiqueta.
  #[error("Error de E/S: {0}")]
  Io(#[from] std::io::Error),

  /// Configuración incompleta o con valores inválidos.
  #[error("Error de configuración: {0}")]
  Config(String),

  /// Correos no ofrece servicio de manifiesto.
  #[error("Correos Manifest service is not available.")]
  ManifestUnavailable,
}

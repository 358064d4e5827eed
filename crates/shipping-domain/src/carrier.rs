// carrier.rs
use crate::{DomainError, WeightUnit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Servicio (producto) del transportista, identificado por su código.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarrierService {
  pub code: String,
  pub name: String,
}

impl CarrierService {
  pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
    Self { code: code.into(), name: name.into() }
  }
}

/// Transportista asignado al albarán, con su servicio por defecto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
  pub name: String,
  pub service: Option<CarrierService>,
}

/// Aplicación (método) de la API de transportista.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarrierMethod {
  Correos,
}

impl fmt::Display for CarrierMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CarrierMethod::Correos => write!(f, "correos"),
    }
  }
}

impl FromStr for CarrierMethod {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "correos" => Ok(CarrierMethod::Correos),
      other => Err(DomainError::ValidationError(format!("Método de transportista desconocido: {}", other))),
    }
  }
}

/// Aplicaciones de transportista registradas: `(clave, nombre)`.
pub fn carrier_apps() -> Vec<(&'static str, &'static str)> {
  vec![("correos", "Correos")]
}

/// Configuración de la API del transportista.
///
/// Además de las credenciales guarda las preferencias que el workflow lee
/// al construir cada envío: si se informa el peso y en qué unidades, si la
/// referencia enviada es la del documento origen y el servicio por defecto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierApiConfig {
  pub method: CarrierMethod,
  pub username: String,
  pub password: String,
  /// Código etiquetador de Correos.
  pub correos_code: Option<String>,
  /// Número de cuenta para abonar los reembolsos.
  pub correos_cc: Option<String>,
  #[serde(default)]
  pub debug: bool,
  /// Timeout de las peticiones, en segundos.
  pub timeout: u64,
  /// Informar el peso del albarán en el envío.
  #[serde(default)]
  pub weight: bool,
  pub weight_unit: Option<WeightUnit>,
  pub weight_api_unit: Option<WeightUnit>,
  #[serde(default)]
  pub reference_origin: bool,
  pub default_service: Option<CarrierService>,
}

impl CarrierApiConfig {
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Self { method: CarrierMethod::Correos,
           username: username.into(),
           password: password.into(),
           correos_code: None,
           correos_cc: None,
           debug: false,
           timeout: 300,
           weight: false,
           weight_unit: None,
           weight_api_unit: None,
           reference_origin: false,
           default_service: None }
  }

  /// Servicio por defecto configurado en la API.
  pub fn get_default_carrier_service(&self) -> Option<&CarrierService> {
    self.default_service.as_ref()
  }

  /// Comprueba los campos obligatorios según el método.
  pub fn validate(&self) -> Result<(), DomainError> {
    if self.username.trim().is_empty() {
      return Err(DomainError::ValidationError("username es obligatorio".to_string()));
    }
    match self.method {
      CarrierMethod::Correos => {
        if self.correos_code.as_deref().map_or(true, |c| c.trim().is_empty()) {
          return Err(DomainError::ValidationError("Correos: el código etiquetador es obligatorio".to_string()));
        }
        if self.correos_cc.as_deref().map_or(true, |c| c.trim().is_empty()) {
          return Err(DomainError::ValidationError("Correos: la cuenta de reembolso es obligatoria".to_string()));
        }
      }
    }
    Ok(())
  }
}

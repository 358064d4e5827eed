use crate::errors::WorkflowError;
use serde::{Deserialize, Serialize};
use shipping_domain::{CarrierApiConfig, CarrierMethod, CarrierService, WeightUnit};
use std::path::PathBuf;

/// Contexto de ejecución de un lote: discriminador de base de datos (se
/// incluye en el nombre de los ficheros de etiqueta), empleado que envía y
/// directorio donde dejar las etiquetas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendContext {
  pub database: String,
  pub employee: Option<String>,
  /// `None` usa el directorio temporal del sistema.
  pub label_dir: Option<PathBuf>,
}

impl Default for SendContext {
  fn default() -> Self {
    SendContext { database: "default".to_string(), employee: None, label_dir: None }
  }
}

/// Configuración completa leída del entorno.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
  pub api: CarrierApiConfig,
  pub context: SendContext,
}

impl WorkflowConfig {
  /// Carga la configuración desde variables de entorno (y `.env` si existe).
  ///
  /// Obligatorias: `CORREOS_USERNAME`, `CORREOS_PASSWORD`, `CORREOS_CODE`,
  /// `CORREOS_CC`.
  /// Opcionales: `CORREOS_DEBUG`, `CORREOS_TIMEOUT`,
  /// `CORREOS_WEIGHT`, `CORREOS_WEIGHT_UNIT`, `CORREOS_WEIGHT_API_UNIT`,
  /// `CORREOS_REFERENCE_ORIGIN`, `CORREOS_DEFAULT_SERVICE`,
  /// `CORREOS_DEFAULT_SERVICE_NAME`, `CORREOS_DATABASE`, `CORREOS_EMPLOYEE`,
  /// `CORREOS_LABEL_DIR`.
  pub fn from_env() -> Result<Self, WorkflowError> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Igual que `from_env` pero leyendo de una función arbitraria.
  pub fn from_lookup<F>(get: F) -> Result<Self, WorkflowError>
    where F: Fn(&str) -> Option<String>
  {
    let var = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let required = |key: &str| var(key).ok_or_else(|| WorkflowError::Config(format!("{} not set", key)));

    let mut api = CarrierApiConfig::new(required("CORREOS_USERNAME")?, required("CORREOS_PASSWORD")?);
    api.method = CarrierMethod::Correos;
    api.correos_code = Some(required("CORREOS_CODE")?);
    api.correos_cc = var("CORREOS_CC");
    api.debug = parse_flag("CORREOS_DEBUG", var("CORREOS_DEBUG"))?;
    if let Some(timeout) = var("CORREOS_TIMEOUT") {
      api.timeout =
        timeout.parse()
               .map_err(|_| WorkflowError::Config(format!("CORREOS_TIMEOUT is not a number: {}", timeout)))?;
    }
    api.weight = parse_flag("CORREOS_WEIGHT", var("CORREOS_WEIGHT"))?;
    api.weight_unit = parse_unit(var("CORREOS_WEIGHT_UNIT"))?;
    api.weight_api_unit = parse_unit(var("CORREOS_WEIGHT_API_UNIT"))?;
    api.reference_origin = parse_flag("CORREOS_REFERENCE_ORIGIN", var("CORREOS_REFERENCE_ORIGIN"))?;
    api.default_service = var("CORREOS_DEFAULT_SERVICE").map(|code| {
                                                          let name = var("CORREOS_DEFAULT_SERVICE_NAME")
                                                            .unwrap_or_else(|| code.clone());
                                                          CarrierService::new(code, name)
                                                        });
    api.validate()?;

    let context = SendContext { database: var("CORREOS_DATABASE").unwrap_or_else(|| "default".to_string()),
                                employee: var("CORREOS_EMPLOYEE"),
                                label_dir: var("CORREOS_LABEL_DIR").map(PathBuf::from) };
    Ok(WorkflowConfig { api, context })
  }
}

fn parse_flag(key: &str, value: Option<String>) -> Result<bool, WorkflowError> {
  match value.as_deref().map(str::to_lowercase).as_deref() {
    None => Ok(false),
    Some("1" | "true" | "yes" | "on") => Ok(true),
    Some("0" | "false" | "no" | "off") => Ok(false),
    Some(other) => Err(WorkflowError::Config(format!("{} is not a boolean: {}", key, other))),
  }
}

fn parse_unit(value: Option<String>) -> Result<Option<WeightUnit>, WorkflowError> {
  value.map(|v| v.parse::<WeightUnit>().map_err(WorkflowError::from)).transpose()
}

// payload.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Datos planos clave/valor de un preregistro de envío, con los nombres de
/// campo que espera Correos (`RemitenteNombre`, `CodProducto`, ...).
///
/// Las claves se guardan ordenadas, de modo que dos payloads construidos
/// con los mismos datos son iguales y se serializan igual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickingPayload(Map<String, JsonValue>);

impl PickingPayload {
  pub fn new() -> Self {
    Self(Map::new())
  }

  pub fn insert(&mut self, key: &str, value: impl Into<JsonValue>) {
    self.0.insert(key.to_string(), value.into());
  }

  pub fn get(&self, key: &str) -> Option<&JsonValue> {
    self.0.get(key)
  }

  /// Valor textual de `key`, si existe y es una cadena.
  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.0.get(key).and_then(|v| v.as_str())
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.0.contains_key(key)
  }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problema de un albarán dentro de un lote. Se registra como mensaje para
/// el usuario y el lote continúa con el siguiente albarán.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ShipmentIssue {
  #[error("Select a service or default service in Correos API (shipment \"{name}\")")]
  MissingService { name: String },

  #[error("Add a office Correos to delivery or change service (shipment \"{name}\")")]
  MissingOffice { name: String },

  #[error("Add country in shipment \"{name}\" delivery address")]
  MissingCountry { name: String },

  #[error("Shipment \"{name}\" not have price and send cashondelivery")]
  MissingPrice { name: String },

  #[error("Not available \"{name}\" label from Correos")]
  LabelNotAvailable { name: String },

  #[error("Not send shipment {name}. {error}")]
  CarrierError { name: String, error: String },
}

impl ShipmentIssue {
  /// Albarán al que se refiere el problema.
  pub fn shipment_name(&self) -> &str {
    match self {
      ShipmentIssue::MissingService { name }
      | ShipmentIssue::MissingOffice { name }
      | ShipmentIssue::MissingCountry { name }
      | ShipmentIssue::MissingPrice { name }
      | ShipmentIssue::LabelNotAvailable { name }
      | ShipmentIssue::CarrierError { name, .. } => name,
    }
  }

  /// Indica si el problema se detectó antes de llamar a Correos.
  pub fn is_validation(&self) -> bool {
    !matches!(self, ShipmentIssue::LabelNotAvailable { .. } | ShipmentIssue::CarrierError { .. })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn carrier_error_message_combines_name_and_text() {
    let issue = ShipmentIssue::CarrierError { name: "OUT/7".into(), error: "CP no válido".into() };
    assert_eq!(issue.to_string(), "Not send shipment OUT/7. CP no válido");
    assert_eq!(issue.shipment_name(), "OUT/7");
    assert!(!issue.is_validation());
  }

  #[test]
  fn country_message_names_the_shipment() {
    let issue = ShipmentIssue::MissingCountry { name: "OUT/8".into() };
    assert!(issue.to_string().contains("\"OUT/8\""));
    assert!(issue.is_validation());
  }
}

use crate::issues::ShipmentIssue;
use std::path::Path;

/// Motivo por el que la reimpresión de etiquetas omite un albarán.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSkip {
  /// El albarán no tiene referencia de Correos.
  NotSent,
  /// Correos no devolvió etiqueta para la referencia.
  NotAvailable,
}

/// Colaborador de observabilidad que recibe los eventos del workflow.
///
/// Se inyecta en `CorreosShipper`; todos los métodos tienen implementación
/// vacía para que cada observador sólo atienda lo que necesite.
pub trait SendObserver: Send + Sync {
  fn shipment_sent(&self, _code: &str, _reference: &str) {}

  fn shipment_not_sent(&self, _code: &str) {}

  fn label_written(&self, _code: &str, _path: &Path) {}

  fn label_skipped(&self, _code: &str, _reason: LabelSkip) {}

  fn issue(&self, _issue: &ShipmentIssue) {}
}

/// Observador por defecto: escribe en la fachada `log` con target `correos`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SendObserver for LogObserver {
  fn shipment_sent(&self, code: &str, reference: &str) {
    log::info!(target: "correos", "Send shipment {} ({})", code, reference);
  }

  fn shipment_not_sent(&self, code: &str) {
    log::error!(target: "correos", "Not send shipment {}.", code);
  }

  fn label_written(&self, _code: &str, path: &Path) {
    log::info!(target: "correos", "Generated tmp label {}", path.display());
  }

  fn label_skipped(&self, code: &str, reason: LabelSkip) {
    match reason {
      LabelSkip::NotSent => log::error!(target: "correos", "Shipment {} has not been sent by Correos.", code),
      LabelSkip::NotAvailable => {
        log::error!(target: "correos", "Label for shipment {} is not available from Correos.", code)
      }
    }
  }

  fn issue(&self, issue: &ShipmentIssue) {
    if issue.is_validation() {
      log::warn!(target: "correos", "{}", issue);
    } else {
      log::error!(target: "correos", "{}", issue);
    }
  }
}

// printer.rs
use crate::errors::WorkflowError;
use crate::observer::LabelSkip;
use crate::shipper::CorreosShipper;
use correos_provider::{PickingConnector, PickingSession};
use shipping_domain::Shipment;
use std::path::PathBuf;
use uuid::Uuid;

impl<C> CorreosShipper<C> where C: PickingConnector
{
  /// Vuelve a descargar las etiquetas de albaranes ya enviados.
  ///
  /// Los albaranes sin referencia o sin etiqueta disponible se omiten (sólo
  /// se notifica al observador). Al terminar, todos los albaranes recibidos
  /// quedan marcados como impresos.
  pub fn print_labels_correos(&self, shipments: &[Shipment]) -> Result<Vec<PathBuf>, WorkflowError> {
    let mut labels = Vec::new();

    let mut session = self.open_session()?;
    for shipment in shipments {
      let Some(reference) = shipment.tracking_ref() else {
        self.observer.label_skipped(&shipment.code, LabelSkip::NotSent);
        continue;
      };

      let label = session.label(reference)?.filter(|l| !l.trim().is_empty());
      let Some(label) = label else {
        self.observer.label_skipped(&shipment.code, LabelSkip::NotAvailable);
        continue;
      };

      let path = self.labels.write(reference, &label)?;
      self.observer.label_written(&shipment.code, &path);
      labels.push(path);
    }
    let ids: Vec<Uuid> = shipments.iter().map(|s| s.id).collect();
    self.repo.mark_printed(&ids)?;
    session.finish();

    Ok(labels)
  }
}

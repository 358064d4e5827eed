// sender.rs
//
// Envío por lotes. Cada albarán se valida y, si pasa, se preregistra en
// Correos. Los problemas de un albarán se acumulan en el informe y el lote
// sigue; los fallos de conexión, de repositorio o una etiqueta corrupta
// abortan el lote (la sesión se cierra igualmente al propagar con `?`).
use crate::errors::WorkflowError;
use crate::issues::ShipmentIssue;
use crate::picking_data::correos_picking_data;
use crate::shipper::{CorreosShipper, SendReport};
use chrono::Utc;
use correos_provider::{is_delivery_oficina, PickingConnector, PickingSession};
use rust_decimal::Decimal;
use shipping_domain::{CarrierService, Shipment, TrackingUpdate};

/// Albarán que ha superado las validaciones previas.
struct Prepared<'a> {
  service: &'a CarrierService,
  price: Option<Decimal>,
  oficina: Option<&'a str>,
}

impl<C> CorreosShipper<C> where C: PickingConnector
{
  /// Envía los albaranes a Correos, uno a uno y en orden.
  pub fn send_correos(&self, shipments: &[Shipment]) -> Result<SendReport, WorkflowError> {
    let mut report = SendReport::default();
    let default_service = self.api.get_default_carrier_service();

    let mut session = self.open_session()?;
    for shipment in shipments {
      let prepared = match self.prepare(shipment, default_service) {
        Ok(p) => p,
        Err(issue) => {
          self.record(&mut report, issue);
          continue;
        }
      };

      let data = correos_picking_data(&self.api,
                                      shipment,
                                      prepared.service,
                                      prepared.price,
                                      self.api.weight,
                                      prepared.oficina);
      let response = session.create(&data)?;
      let reference = response.reference();

      if let Some(reference) = reference {
        let update = TrackingUpdate { reference: reference.to_string(),
                                      service: prepared.service.clone(),
                                      delivered: true,
                                      printed: true,
                                      send_date: Utc::now(),
                                      employee: self.context.employee.clone() };
        self.repo.write_tracking(&shipment.id, update)?;
        self.observer.shipment_sent(&shipment.code, reference);
        report.references.push(shipment.code.clone());
      } else {
        self.observer.shipment_not_sent(&shipment.code);
      }

      match response.label() {
        Some(label) => {
          let path = self.labels.write(reference.unwrap_or_default(), label)?;
          self.observer.label_written(&shipment.code, &path);
          report.labels.push(path);
        }
        None => self.record(&mut report, ShipmentIssue::LabelNotAvailable { name: shipment.rec_name().to_string() }),
      }

      if let Some(error) = response.error() {
        self.record(&mut report,
                    ShipmentIssue::CarrierError { name: shipment.rec_name().to_string(), error: error.to_string() });
      }
    }
    session.finish();

    Ok(report)
  }

  /// Validaciones previas, en orden: servicio, oficina, país y precio.
  fn prepare<'a>(&self,
                 shipment: &'a Shipment,
                 default_service: Option<&'a CarrierService>)
                 -> Result<Prepared<'a>, ShipmentIssue> {
    let name = || shipment.rec_name().to_string();

    let service = shipment.carrier_service
                          .as_ref()
                          .or_else(|| shipment.carrier.as_ref().and_then(|c| c.service.as_ref()))
                          .or(default_service)
                          .ok_or_else(|| ShipmentIssue::MissingService { name: name() })?;

    let delivery = shipment.delivery_address.as_ref();
    let mut oficina = None;
    if is_delivery_oficina(&service.code) {
      oficina = Some(delivery.and_then(|a| a.correos_office())
                             .ok_or_else(|| ShipmentIssue::MissingOffice { name: name() })?);
    }

    if delivery.and_then(|a| a.country_code()).map_or(true, str::is_empty) {
      return Err(ShipmentIssue::MissingCountry { name: name() });
    }

    let mut price = None;
    if shipment.carrier_cashondelivery {
      price = Some(shipment.price_ondelivery()
                           .ok_or_else(|| ShipmentIssue::MissingPrice { name: name() })?);
    }

    Ok(Prepared { service, price, oficina })
  }

  fn record(&self, report: &mut SendReport, issue: ShipmentIssue) {
    self.observer.issue(&issue);
    report.errors.push(issue);
  }
}

// shipment.rs
use crate::{Address, Carrier, CarrierService, Company, Party, Warehouse, WeightUnit};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Albarán de salida.
///
/// Los campos `carrier_*` de seguimiento (referencia, servicio asignado,
/// entregado/impreso, fecha y empleado de envío) sólo los modifica el
/// workflow a través de `ShipmentRepository`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
  pub id: Uuid,
  pub code: String,
  pub customer: Party,
  pub delivery_address: Option<Address>,
  pub company: Company,
  pub warehouse: Option<Warehouse>,
  pub carrier: Option<Carrier>,
  /// Nombre del documento origen (pedido de venta, ...), si lo hay.
  pub origin: Option<String>,
  pub carrier_service: Option<CarrierService>,
  #[serde(default)]
  pub carrier_cashondelivery: bool,
  /// Importe a cobrar contra reembolso calculado por el pedido.
  pub carrier_cashondelivery_price: Option<Decimal>,
  pub weight: Option<f64>,
  pub weight_uom: Option<WeightUnit>,
  pub number_packages: Option<u32>,
  pub carrier_notes: Option<String>,
  pub carrier_tracking_ref: Option<String>,
  #[serde(default)]
  pub carrier_delivery: bool,
  #[serde(default)]
  pub carrier_printed: bool,
  pub carrier_send_date: Option<DateTime<Utc>>,
  pub carrier_send_employee: Option<String>,
}

impl Shipment {
  pub fn new(code: impl Into<String>, customer: Party, company: Company) -> Self {
    Self { id: Uuid::new_v4(), code: code.into(), customer, company, ..Default::default() }
  }

  /// Nombre del registro usado en los mensajes al usuario.
  pub fn rec_name(&self) -> &str {
    &self.code
  }

  /// Referencia de seguimiento, ignorando valores vacíos.
  pub fn tracking_ref(&self) -> Option<&str> {
    self.carrier_tracking_ref.as_deref().filter(|r| !r.is_empty())
  }

  /// Importe contra reembolso, si es positivo.
  pub fn price_ondelivery(&self) -> Option<Decimal> {
    self.carrier_cashondelivery_price.filter(|p| !p.is_zero())
  }

  /// Dirección del remitente: la del almacén o la primera de la empresa.
  pub fn sender_address(&self) -> Option<&Address> {
    self.warehouse
        .as_ref()
        .and_then(|w| w.address.as_ref())
        .or_else(|| self.company.party.addresses.first())
  }

  pub fn apply_tracking(&mut self, update: &TrackingUpdate) {
    self.carrier_tracking_ref = Some(update.reference.clone());
    self.carrier_service = Some(update.service.clone());
    self.carrier_delivery = update.delivered;
    self.carrier_printed = update.printed;
    self.carrier_send_date = Some(update.send_date);
    self.carrier_send_employee = update.employee.clone();
  }
}

/// Datos de seguimiento que se escriben al confirmar un envío.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingUpdate {
  pub reference: String,
  pub service: CarrierService,
  pub delivered: bool,
  pub printed: bool,
  pub send_date: DateTime<Utc>,
  pub employee: Option<String>,
}

// picking_data.rs
//
// Construcción del payload de preregistro a partir del albarán. Función
// pura: mismos datos de entrada, mismo payload.
use crate::text::{unaccent, unaccent_opt};
use correos_provider::PickingPayload;
use rust_decimal::Decimal;
use shipping_domain::{Address, CarrierApiConfig, CarrierService, Shipment, WeightUnit};

/// Tipo de reembolso enviado a Correos para los cobros contra reembolso.
const TIPO_REEMBOLSO: &str = "RC";

/// Cifras significativas del peso enviado.
const WEIGHT_DIGITS: u32 = 12;

/// Datos de preregistro de un albarán.
///
/// - `price`: importe contra reembolso; sólo se informa si el albarán lo
///   pide y el importe viene dado.
/// - `weight`: si se calcula y envía el peso.
/// - `correos_oficina`: oficina de entrega para servicios en oficina.
///
/// Las direcciones ausentes se envían como campos vacíos; validar que
/// existan es responsabilidad de quien llama.
pub fn correos_picking_data(api: &CarrierApiConfig,
                            shipment: &Shipment,
                            service: &CarrierService,
                            price: Option<Decimal>,
                            weight: bool,
                            correos_oficina: Option<&str>)
                            -> PickingPayload {
  let packages = match shipment.number_packages {
    Some(n) if n > 0 => n,
    _ => 1,
  };

  let company = &shipment.company.party;
  let customer = &shipment.customer;
  let empty = Address::default();
  let remitente = shipment.sender_address().unwrap_or(&empty);
  let destinatario = shipment.delivery_address.as_ref().unwrap_or(&empty);

  let code = match (api.reference_origin, shipment.origin.as_deref()) {
    (true, Some(origin)) if !origin.is_empty() => origin,
    _ => shipment.code.as_str(),
  };

  let notes = match shipment.carrier_notes.as_deref() {
    Some(n) if !n.is_empty() => format!("{}\n", n),
    _ => String::new(),
  };

  let mut data = PickingPayload::new();
  data.insert("TotalBultos", packages);
  data.insert("RemitenteNombre", unaccent(&company.name));
  data.insert("RemitenteNif", company.tax_identifier().unwrap_or_default());
  data.insert("RemitenteDireccion", unaccent_opt(remitente.street.as_deref()));
  data.insert("RemitenteLocalidad", unaccent_opt(remitente.city.as_deref()));
  data.insert("RemitenteProvincia", unaccent_opt(remitente.subdivision.as_ref().map(|s| s.name.as_str())));
  data.insert("RemitenteCP", remitente.zip.clone().unwrap_or_default());
  data.insert("RemitenteTelefonocontacto",
              remitente.phone.as_deref().or_else(|| company.get_mechanism("phone")).unwrap_or_default());
  data.insert("RemitenteEmail",
              remitente.email.as_deref().or_else(|| company.get_mechanism("email")).unwrap_or_default());
  data.insert("DestinatarioNombre", unaccent(&customer.name));
  data.insert("DestinatarioDireccion", unaccent_opt(destinatario.street.as_deref()));
  data.insert("DestinatarioLocalidad", unaccent_opt(destinatario.city.as_deref()));
  data.insert("DestinatarioProvincia", unaccent_opt(destinatario.subdivision.as_ref().map(|s| s.name.as_str())));
  data.insert("DestinatarioCP", destinatario.zip.clone().unwrap_or_default());
  data.insert("DestinatarioPais", destinatario.country_code().unwrap_or_default());
  data.insert("DestinatarioTelefonocontacto",
              destinatario.phone.as_deref().or_else(|| customer.get_mechanism("phone")).unwrap_or_default());
  data.insert("DestinatarioNumeroSMS",
              destinatario.mobile.as_deref().or_else(|| customer.get_mechanism("mobile")).unwrap_or_default());
  data.insert("DestinatarioEmail",
              destinatario.email.as_deref().or_else(|| customer.get_mechanism("email")).unwrap_or_default());
  data.insert("CodProducto", service.code.as_str());
  data.insert("ReferenciaCliente", code);
  data.insert("Observaciones1", unaccent(&notes));

  if let (true, Some(price)) = (shipment.carrier_cashondelivery, price) {
    data.insert("Reembolso", true);
    data.insert("TipoReembolso", TIPO_REEMBOLSO);
    data.insert("Importe", price.to_string());
    data.insert("NumeroCuenta", api.correos_cc.clone().unwrap_or_default());
  }

  if let (true, Some(w)) = (weight, shipment.weight) {
    data.insert("peso", format_weight(api_weight(api, shipment, w)));
  }

  if let Some(oficina) = correos_oficina {
    data.insert("OficinaElegida", oficina);
  }

  data
}

/// Peso en la unidad de la API. Un peso cero se envía como 1 porque Correos
/// rechaza los envíos sin peso; la conversión se hace después.
fn api_weight(api: &CarrierApiConfig, shipment: &Shipment, weight: f64) -> f64 {
  let weight = if weight == 0.0 { 1.0 } else { weight };
  match (api.weight_api_unit, shipment.weight_uom.or(api.weight_unit)) {
    (Some(to), Some(from)) => WeightUnit::compute_qty(from, weight, to),
    _ => weight,
  }
}

/// Peso como texto decimal, sin ceros sobrantes ni ruido de la conversión
/// (`1`, `1500`, `0.25`, `0.0004`).
fn format_weight(weight: f64) -> String {
  Decimal::from_f64_retain(weight).and_then(|d| d.round_sf(WEIGHT_DIGITS))
                                  .filter(|d| !d.is_zero() || weight == 0.0)
                                  .map(|d| d.normalize().to_string())
                                  .unwrap_or_else(|| weight.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn weight_is_rendered_without_trailing_zeros() {
    assert_eq!(format_weight(1.0), "1");
    assert_eq!(format_weight(1500.0), "1500");
    assert_eq!(format_weight(0.25), "0.25");
    assert_eq!(format_weight(2.0004), "2.0004");
    assert_eq!(format_weight(0.0004), "0.0004");
    assert_eq!(format_weight(0.45359237000000004), "0.45359237");
  }
}

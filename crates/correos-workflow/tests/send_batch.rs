mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::{api, shipment, Harness};
use correos_provider::{CreateResponse, ProviderError};
use correos_workflow::{ShipmentIssue, WorkflowError};
use shipping_domain::DomainError;
use rust_decimal_macros::dec;
use shipping_domain::CarrierService;

#[test]
fn missing_country_is_reported_without_calling_correos() {
  let h = Harness::new(api());
  let mut s = shipment("OUT/1");
  s.delivery_address.as_mut().unwrap().country = None;
  let shipments = h.store(vec![s]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.errors, vec![ShipmentIssue::MissingCountry { name: "OUT/1".into() }]);
  assert!(report.references.is_empty());
  assert!(h.connector.created().is_empty());
  assert_eq!(h.connector.closes(), 1);
}

#[test]
fn office_service_without_office_code_is_skipped() {
  let h = Harness::new(api());
  let mut s = shipment("OUT/2");
  s.carrier_service = Some(CarrierService::new("S0236", "Paq Oficina"));
  let shipments = h.store(vec![s]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.errors, vec![ShipmentIssue::MissingOffice { name: "OUT/2".into() }]);
  assert!(h.connector.created().is_empty());
}

#[test]
fn office_code_is_sent_for_office_services() {
  let h = Harness::new(api());
  let mut s = shipment("OUT/3");
  s.carrier_service = Some(CarrierService::new("S0236", "Paq Oficina"));
  s.delivery_address.as_mut().unwrap().correos = Some("2900700".into());
  let shipments = h.store(vec![s]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert!(report.errors.is_empty(), "{:?}", report.errors);
  let created = h.connector.created();
  assert_eq!(created[0].get_str("OficinaElegida"), Some("2900700"));
  assert_eq!(created[0].get_str("CodProducto"), Some("S0236"));
}

#[test]
fn cash_on_delivery_without_price_is_reported() {
  let h = Harness::new(api());
  let mut zero = shipment("OUT/4");
  zero.carrier_cashondelivery = true;
  zero.carrier_cashondelivery_price = Some(dec!(0));
  let mut unset = shipment("OUT/5");
  unset.carrier_cashondelivery = true;
  let shipments = h.store(vec![zero, unset]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.errors,
             vec![ShipmentIssue::MissingPrice { name: "OUT/4".into() },
                  ShipmentIssue::MissingPrice { name: "OUT/5".into() }]);
  assert!(h.connector.created().is_empty());
}

#[test]
fn missing_service_is_reported() {
  let h = Harness::new(api());
  let mut s = shipment("OUT/6");
  s.carrier = None;
  let shipments = h.store(vec![s]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.errors, vec![ShipmentIssue::MissingService { name: "OUT/6".into() }]);
}

#[test]
fn default_service_from_configuration_is_used_and_stored() {
  let mut cfg = api();
  cfg.default_service = Some(CarrierService::new("S0132", "Paq 72"));
  let h = Harness::new(cfg);
  let mut s = shipment("OUT/7");
  s.carrier = None;
  let shipments = h.store(vec![s]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.references, vec!["OUT/7".to_string()]);
  let stored = h.reload(&shipments[0]);
  assert_eq!(stored.carrier_service.map(|s| s.code), Some("S0132".to_string()));
}

#[test]
fn accepted_shipment_is_marked_sent_and_label_written() {
  let h = Harness::new(api());
  let label = b"%PDF-1.4 label R1";
  h.connector.push_response(CreateResponse::new(Some("R1"), Some(STANDARD.encode(label).as_str()), Some("")));
  let shipments = h.store(vec![shipment("OUT/8")]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.references, vec!["OUT/8".to_string()]);
  assert!(report.errors.is_empty());
  assert_eq!(report.labels.len(), 1);
  assert_eq!(std::fs::read(&report.labels[0]).unwrap(), label);
  let name = report.labels[0].file_name().unwrap().to_str().unwrap().to_string();
  assert!(name.starts_with("testdb-correos-R1-"), "{}", name);

  let stored = h.reload(&shipments[0]);
  assert_eq!(stored.carrier_tracking_ref.as_deref(), Some("R1"));
  assert!(stored.carrier_printed);
  assert!(stored.carrier_delivery);
  assert!(stored.carrier_send_date.is_some());
  assert_eq!(stored.carrier_send_employee.as_deref(), Some("operator"));
  assert_eq!(h.observer.events(), vec!["sent:OUT/8:R1".to_string(), "label:OUT/8".to_string()]);
}

#[test]
fn rejected_shipment_records_label_and_carrier_errors() {
  let h = Harness::new(api());
  h.connector.push_response(CreateResponse::new(Some(""), None, Some("boom")));
  let shipments = h.store(vec![shipment("OUT/9")]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert!(report.references.is_empty());
  assert!(report.labels.is_empty());
  assert_eq!(report.errors,
             vec![ShipmentIssue::LabelNotAvailable { name: "OUT/9".into() },
                  ShipmentIssue::CarrierError { name: "OUT/9".into(), error: "boom".into() }]);
  assert_eq!(report.error_messages()[1], "Not send shipment OUT/9. boom");
  let stored = h.reload(&shipments[0]);
  assert!(stored.carrier_tracking_ref.is_none());
  assert!(!stored.carrier_printed);
}

#[test]
fn shipment_can_be_sent_unlabelled_and_errored_at_once() {
  let h = Harness::new(api());
  h.connector.push_response(CreateResponse::new(Some("R2"), None, Some("etiqueta pendiente")));
  let shipments = h.store(vec![shipment("OUT/10")]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.references, vec!["OUT/10".to_string()]);
  assert_eq!(report.errors.len(), 2);
  assert_eq!(h.reload(&shipments[0]).carrier_tracking_ref.as_deref(), Some("R2"));
}

#[test]
fn validation_failures_do_not_stop_the_batch() {
  let h = Harness::new(api());
  let first = shipment("OUT/11");
  let mut second = shipment("OUT/12");
  second.delivery_address = None;
  let third = shipment("OUT/13");
  let shipments = h.store(vec![first, second, third]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert_eq!(report.references, vec!["OUT/11".to_string(), "OUT/13".to_string()]);
  assert_eq!(report.labels.len(), 2);
  assert_eq!(report.errors, vec![ShipmentIssue::MissingCountry { name: "OUT/12".into() }]);
  assert_eq!(h.connector.created().len(), 2);
}

#[test]
fn transport_failure_aborts_the_batch_and_releases_the_session() {
  let h = Harness::new(api());
  h.connector
   .push_response(CreateResponse::new(Some("R3"), None, None))
   .push_failure(ProviderError::Transport("timeout".into()));
  let shipments = h.store(vec![shipment("OUT/14"), shipment("OUT/15"), shipment("OUT/16")]);

  let err = h.shipper.send_correos(&shipments).unwrap_err();

  assert!(matches!(err, WorkflowError::Provider(ProviderError::Transport(_))));
  assert_eq!(h.connector.created().len(), 2);
  assert_eq!(h.connector.connects(), 1);
  assert_eq!(h.connector.closes(), 1);
  // el primer envío ya quedó registrado antes del fallo
  assert_eq!(h.reload(&shipments[0]).carrier_tracking_ref.as_deref(), Some("R3"));
  assert!(h.reload(&shipments[2]).carrier_tracking_ref.is_none());
}

#[test]
fn corrupt_label_is_a_hard_failure() {
  let h = Harness::new(api());
  h.connector.push_response(CreateResponse::new(Some("R4"), Some("%%% not base64 %%%"), None));
  let shipments = h.store(vec![shipment("OUT/17")]);

  let err = h.shipper.send_correos(&shipments).unwrap_err();

  assert!(matches!(err, WorkflowError::LabelDecode { .. }));
  assert_eq!(h.connector.closes(), 1);
  assert_eq!(h.reload(&shipments[0]).carrier_tracking_ref.as_deref(), Some("R4"));
}

#[test]
fn refused_connection_is_a_hard_failure() {
  let h = Harness::new(api());
  h.connector.refuse_connections(ProviderError::Connection("dns".into()));
  let shipments = h.store(vec![shipment("OUT/18")]);

  let err = h.shipper.send_correos(&shipments).unwrap_err();

  assert!(matches!(err, WorkflowError::Provider(ProviderError::Connection(_))));
  assert_eq!(h.connector.closes(), 0);
}

#[test]
fn missing_correos_code_is_a_config_error() {
  let mut cfg = api();
  cfg.correos_code = None;
  let h = Harness::new(cfg);

  let err = h.shipper.send_correos(&[]).unwrap_err();

  assert!(matches!(err, WorkflowError::Config(_)));
  assert_eq!(h.connector.connects(), 0);
}

#[test]
fn missing_refund_account_is_rejected_before_connecting() {
  let mut cfg = api();
  cfg.correos_cc = None;
  let h = Harness::new(cfg);
  let mut s = shipment("OUT/19");
  s.carrier_cashondelivery = true;
  s.carrier_cashondelivery_price = Some(dec!(25));
  let shipments = h.store(vec![s]);

  let err = h.shipper.send_correos(&shipments).unwrap_err();

  assert!(matches!(err, WorkflowError::Domain(DomainError::ValidationError(_))));
  assert_eq!(h.connector.connects(), 0);
  assert!(h.connector.created().is_empty());
}

#[test]
fn label_without_reference_is_still_written() {
  let h = Harness::new(api());
  h.connector.push_response(CreateResponse::new(None, Some(STANDARD.encode(b"%PDF orphan").as_str()), Some("sin referencia")));
  let shipments = h.store(vec![shipment("OUT/20")]);

  let report = h.shipper.send_correos(&shipments).expect("send");

  assert!(report.references.is_empty());
  assert_eq!(report.labels.len(), 1);
  let name = report.labels[0].file_name().unwrap().to_str().unwrap().to_string();
  assert!(name.starts_with("testdb-correos--"), "{}", name);
  assert!(name.ends_with(".pdf"), "{}", name);
  assert_eq!(report.errors,
             vec![ShipmentIssue::CarrierError { name: "OUT/20".into(), error: "sin referencia".into() }]);
  assert_eq!(h.observer.events(), vec!["not_sent:OUT/20".to_string(), "label:OUT/20".to_string(), "issue:OUT/20".to_string()]);
}

// Ejemplo: enviar los albaranes de ejemplo contra el sandbox de Correos y
// reimprimir después sus etiquetas.
use correos_provider::SandboxPicking;
use correos_workflow::{CorreosShipper, SendContext};
use shipping_domain::{CarrierApiConfig, DomainStubs, ShipmentRepository};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let mut api = CarrierApiConfig::new("demo", "demo");
  api.correos_code = Some("XXX1".into());
  api.correos_cc = Some("ES7620770024003102575766".into());
  api.weight = true;
  api.weight_api_unit = "g".parse().ok();

  let repo = Arc::new(DomainStubs::sample_repo());
  let shipper = CorreosShipper::new(api, SandboxPicking::new(), repo.clone(), SendContext::default());

  let shipments = repo.list_shipments()?;
  let (references, labels, errors) = shipper.send_correos(&shipments)?.into_parts();
  println!("Enviados: {:?}", references);
  println!("Etiquetas: {:?}", labels);
  println!("Errores: {:?}", errors);

  let sent = repo.list_shipments()?;
  let reprinted = shipper.print_labels_correos(&sent)?;
  println!("Reimpresas: {}", reprinted.len());

  for path in labels.iter().chain(reprinted.iter()) {
    let _ = std::fs::remove_file(path);
  }
  Ok(())
}

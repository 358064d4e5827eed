#![allow(dead_code)]
use correos_provider::SandboxPicking;
use correos_workflow::{CorreosShipper, LabelSkip, SendContext, SendObserver, ShipmentIssue};
use shipping_domain::{CarrierApiConfig, DomainStubs, InMemoryShipmentRepository, Shipment, ShipmentRepository};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub fn api() -> CarrierApiConfig {
  let mut api = CarrierApiConfig::new("user", "secret");
  api.correos_code = Some("XXX1".into());
  api.correos_cc = Some("ES7620770024003102575766".into());
  api
}

/// Eventos recibidos por el observador, como texto.
#[derive(Default)]
pub struct RecordingObserver {
  pub events: Mutex<Vec<String>>,
}

impl RecordingObserver {
  pub fn events(&self) -> Vec<String> {
    self.events.lock().unwrap().clone()
  }

  fn push(&self, event: String) {
    self.events.lock().unwrap().push(event);
  }
}

impl SendObserver for RecordingObserver {
  fn shipment_sent(&self, code: &str, reference: &str) {
    self.push(format!("sent:{}:{}", code, reference));
  }

  fn shipment_not_sent(&self, code: &str) {
    self.push(format!("not_sent:{}", code));
  }

  fn label_written(&self, code: &str, _path: &Path) {
    self.push(format!("label:{}", code));
  }

  fn label_skipped(&self, code: &str, reason: LabelSkip) {
    self.push(format!("skip:{}:{:?}", code, reason));
  }

  fn issue(&self, issue: &ShipmentIssue) {
    self.push(format!("issue:{}", issue.shipment_name()));
  }
}

pub struct Harness {
  pub connector: SandboxPicking,
  pub repo: Arc<InMemoryShipmentRepository>,
  pub observer: Arc<RecordingObserver>,
  pub shipper: CorreosShipper<SandboxPicking>,
  pub label_dir: TempDir,
}

impl Harness {
  pub fn new(api: CarrierApiConfig) -> Self {
    let connector = SandboxPicking::new();
    let repo = Arc::new(InMemoryShipmentRepository::new());
    let observer = Arc::new(RecordingObserver::default());
    let label_dir = tempfile::tempdir().expect("tempdir");
    let context = SendContext { database: "testdb".into(),
                                employee: Some("operator".into()),
                                label_dir: Some(label_dir.path().to_path_buf()) };
    let shipper =
      CorreosShipper::new(api, connector.clone(), repo.clone(), context).with_observer(observer.clone());
    Self { connector, repo, observer, shipper, label_dir }
  }

  /// Guarda los albaranes en el repositorio y los devuelve.
  pub fn store(&self, shipments: Vec<Shipment>) -> Vec<Shipment> {
    for s in &shipments {
      self.repo.save_shipment(s.clone()).expect("save");
    }
    shipments
  }

  pub fn reload(&self, shipment: &Shipment) -> Shipment {
    self.repo.get_shipment(&shipment.id).expect("get").expect("exists")
  }
}

pub fn shipment(code: &str) -> Shipment {
  DomainStubs::sample_shipment(code)
}

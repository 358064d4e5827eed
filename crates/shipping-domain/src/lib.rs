//! shipping-domain: registros del ERP que intervienen en un envío.
//!
//! Define las direcciones, terceros, configuración de la API del
//! transportista y albaranes de salida (`Shipment`), junto con el contrato
//! `ShipmentRepository` por el que el workflow escribe los datos de
//! seguimiento. Los campos propios de Correos (código de oficina, código
//! etiquetador, cuenta de reembolso) son campos aditivos de estos registros.
mod carrier;
mod domain_repository;
mod domain_stubs;
mod errors;
mod party;
mod shipment;
mod weight;

pub use carrier::{carrier_apps, Carrier, CarrierApiConfig, CarrierMethod, CarrierService};
pub use domain_repository::{InMemoryShipmentRepository, ShipmentRepository};
pub use domain_stubs::DomainStubs;
pub use errors::DomainError;
pub use party::{Address, Company, ContactMechanism, Country, Party, Subdivision, Warehouse};
pub use shipment::{Shipment, TrackingUpdate};
pub use weight::WeightUnit;

//! correos-workflow: envío de albaranes con Correos
//!
//! Orquesta el cliente de Correos (`correos_provider`) sobre los albaranes
//! del dominio (`shipping_domain`):
//!
//! - `correos_picking_data`: construye el payload de preregistro.
//! - `CorreosShipper::send_correos`: envía un lote y clasifica cada
//!   resultado en referencias, etiquetas y errores.
//! - `CorreosShipper::print_labels_correos`: reimprime etiquetas de
//!   albaranes ya enviados.
//!
//! La sesión con Correos se abre una vez por lote y se cierra una única vez,
//! también cuando un fallo duro aborta el lote.

pub mod api;
pub mod config;
pub mod errors;
pub mod issues;
pub mod labels;
pub mod observer;
pub mod picking_data;
pub mod printer;
pub mod sender;
pub mod shipper;
pub mod text;

pub use config::{SendContext, WorkflowConfig};
pub use errors::WorkflowError;
pub use issues::ShipmentIssue;
pub use labels::{decode_label, LabelWriter};
pub use observer::{LabelSkip, LogObserver, SendObserver};
pub use picking_data::correos_picking_data;
pub use shipper::{CorreosShipper, SendReport};
pub use text::unaccent;

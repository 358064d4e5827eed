//! correos-provider: frontera con el cliente de Correos.
//!
//! El cliente real de la API de Correos es un colaborador opaco: se consume
//! a través de `PickingConnector`/`PickingSession`. Este crate define ese
//! contrato, la respuesta de preregistro, la lista fija de servicios con
//! entrega en oficina, la sesión con ámbito (`ScopedSession`) que garantiza
//! un único cierre, y un conector en memoria (`SandboxPicking`) para pruebas.
//!
//! ```rust
//! use correos_provider::{Credentials, ScopedSession, SandboxPicking, PickingSession};
//! let connector = SandboxPicking::new();
//! let credentials = Credentials { username: "user".into(), password: "pw".into(),
//!                                 code: "XXX1".into(), timeout: 30, debug: false };
//! let mut session = ScopedSession::open(&connector, &credentials).unwrap();
//! let message = session.test_connection().unwrap();
//! session.finish();
//! assert!(!message.is_empty());
//! assert_eq!(connector.closes(), 1);
//! ```
pub mod errors;
pub mod payload;
pub mod services;
pub mod session;
pub mod stubs;

pub use errors::ProviderError;
pub use payload::PickingPayload;
pub use services::{delivery_oficina, is_delivery_oficina};
pub use session::{CreateResponse, Credentials, PickingConnector, PickingSession, ScopedSession};
pub use stubs::{SandboxPicking, SandboxSession, SANDBOX_LABEL};

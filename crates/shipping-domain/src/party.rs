// party.rs
use serde::{Deserialize, Serialize};

/// Medio de contacto de un tercero (`phone`, `mobile`, `email`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMechanism {
  pub kind: String,
  pub value: String,
}

impl ContactMechanism {
  pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
    Self { kind: kind.into(), value: value.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  /// Código ISO del país (por ejemplo `ES`).
  pub code: String,
}

/// Dirección postal de remitente o destinatario.
///
/// `correos` guarda el código de la oficina de Correos donde se recoge el
/// envío cuando el servicio elegido es de entrega en oficina.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub street: Option<String>,
  pub city: Option<String>,
  pub zip: Option<String>,
  pub subdivision: Option<Subdivision>,
  pub country: Option<Country>,
  pub phone: Option<String>,
  pub mobile: Option<String>,
  pub email: Option<String>,
  pub correos: Option<String>,
}

impl Address {
  pub fn with_street(mut self, street: impl Into<String>) -> Self {
    self.street = Some(street.into());
    self
  }

  pub fn with_city(mut self, city: impl Into<String>) -> Self {
    self.city = Some(city.into());
    self
  }

  pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
    self.zip = Some(zip.into());
    self
  }

  pub fn with_subdivision(mut self, name: impl Into<String>) -> Self {
    self.subdivision = Some(Subdivision { name: name.into() });
    self
  }

  pub fn with_country(mut self, code: impl Into<String>) -> Self {
    self.country = Some(Country { code: code.into() });
    self
  }

  pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
    self.phone = Some(phone.into());
    self
  }

  pub fn with_email(mut self, email: impl Into<String>) -> Self {
    self.email = Some(email.into());
    self
  }

  pub fn with_correos_office(mut self, office: impl Into<String>) -> Self {
    self.correos = Some(office.into());
    self
  }

  /// Código de oficina de Correos, ignorando valores vacíos.
  pub fn correos_office(&self) -> Option<&str> {
    self.correos.as_deref().filter(|c| !c.trim().is_empty())
  }

  pub fn country_code(&self) -> Option<&str> {
    self.country.as_ref().map(|c| c.code.as_str())
  }
}

/// Tercero: cliente o empresa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
  pub name: String,
  pub vat_code: Option<String>,
  pub identifier_code: Option<String>,
  #[serde(default)]
  pub addresses: Vec<Address>,
  #[serde(default)]
  pub contact_mechanisms: Vec<ContactMechanism>,
}

impl Party {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), ..Default::default() }
  }

  /// Primer medio de contacto del tipo indicado.
  pub fn get_mechanism(&self, kind: &str) -> Option<&str> {
    self.contact_mechanisms
        .iter()
        .find(|m| m.kind == kind)
        .map(|m| m.value.as_str())
  }

  /// NIF del tercero: código VAT o, en su defecto, el identificador.
  pub fn tax_identifier(&self) -> Option<&str> {
    self.vat_code.as_deref().or(self.identifier_code.as_deref())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
  pub party: Party,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
  pub name: String,
  pub address: Option<Address>,
}

// weight.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unidades de peso admitidas en albaranes y en la configuración de la API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
  Gram,
  Kilogram,
  Ounce,
  Pound,
}

impl WeightUnit {
  /// Factor respecto al gramo.
  fn factor(self) -> f64 {
    match self {
      WeightUnit::Gram => 1.0,
      WeightUnit::Kilogram => 1000.0,
      WeightUnit::Ounce => 28.349_523_125,
      WeightUnit::Pound => 453.592_37,
    }
  }

  /// Convierte `qty` expresado en `from` a la unidad `to`.
  pub fn compute_qty(from: WeightUnit, qty: f64, to: WeightUnit) -> f64 {
    if from == to {
      return qty;
    }
    qty * from.factor() / to.factor()
  }
}

impl fmt::Display for WeightUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      WeightUnit::Gram => "g",
      WeightUnit::Kilogram => "kg",
      WeightUnit::Ounce => "oz",
      WeightUnit::Pound => "lb",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for WeightUnit {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "g" | "gram" | "grams" => Ok(WeightUnit::Gram),
      "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilogram),
      "oz" | "ounce" | "ounces" => Ok(WeightUnit::Ounce),
      "lb" | "pound" | "pounds" => Ok(WeightUnit::Pound),
      other => Err(DomainError::ValidationError(format!("Unidad de peso desconocida: {}", other))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kilograms_to_grams() {
    assert_eq!(WeightUnit::compute_qty(WeightUnit::Kilogram, 2.5, WeightUnit::Gram), 2500.0);
  }

  #[test]
  fn same_unit_is_identity() {
    assert_eq!(WeightUnit::compute_qty(WeightUnit::Pound, 3.0, WeightUnit::Pound), 3.0);
  }

  #[test]
  fn parse_short_and_long_names() {
    assert_eq!("KG".parse::<WeightUnit>().unwrap(), WeightUnit::Kilogram);
    assert_eq!("grams".parse::<WeightUnit>().unwrap(), WeightUnit::Gram);
    assert!("stone".parse::<WeightUnit>().is_err());
  }
}

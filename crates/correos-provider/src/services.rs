// services.rs

/// Códigos de producto de Correos que exigen entrega en una oficina
/// elegida por el destinatario.
const DELIVERY_OFICINA: &[&str] = &["S0133", "S0176", "S0178", "S0236"];

/// Lista fija de servicios con entrega en oficina.
pub fn delivery_oficina() -> &'static [&'static str] {
  DELIVERY_OFICINA
}

/// Indica si el código de servicio requiere código de oficina.
pub fn is_delivery_oficina(code: &str) -> bool {
  DELIVERY_OFICINA.contains(&code)
}

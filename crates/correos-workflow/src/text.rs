// text.rs
use unicode_normalization::UnicodeNormalization;

/// Elimina tildes y demás diacríticos: descompone en NFKD y descarta todo lo
/// que no sea ASCII. La API de Correos rechaza o desfigura los acentos.
pub fn unaccent(text: &str) -> String {
  text.nfkd().filter(char::is_ascii).collect()
}

/// Variante para campos opcionales: `None` se envía como cadena vacía.
pub fn unaccent_opt(text: Option<&str>) -> String {
  text.map(unaccent).unwrap_or_default()
}

// labels.rs
use crate::config::SendContext;
use crate::errors::WorkflowError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;
use std::path::PathBuf;

/// Decodifica una etiqueta en base64. Se ignoran los saltos de línea y
/// espacios que Correos intercala en el texto.
pub fn decode_label(reference: &str, label_b64: &str) -> Result<Vec<u8>, WorkflowError> {
  let compact: String = label_b64.chars().filter(|c| !c.is_whitespace()).collect();
  STANDARD.decode(compact.as_bytes())
          .map_err(|source| WorkflowError::LabelDecode { reference: reference.to_string(), source })
}

/// Escribe etiquetas PDF en ficheros temporales persistentes, nombrados
/// `{database}-correos-{reference}-XXXXXX.pdf`. Quien llama decide cuándo
/// borrarlos.
#[derive(Debug, Clone)]
pub struct LabelWriter {
  database: String,
  dir: Option<PathBuf>,
}

impl LabelWriter {
  pub fn new(context: &SendContext) -> Self {
    Self { database: context.database.clone(), dir: context.label_dir.clone() }
  }

  pub fn write(&self, reference: &str, label_b64: &str) -> Result<PathBuf, WorkflowError> {
    let content = decode_label(reference, label_b64)?;
    let prefix = format!("{}-correos-{}-", sanitize(&self.database), sanitize(reference));
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".pdf");
    let mut temp = match &self.dir {
      Some(dir) => builder.tempfile_in(dir)?,
      None => builder.tempfile()?,
    };
    temp.write_all(&content)?;
    temp.flush()?;
    let (_file, path) = temp.keep().map_err(|e| e.error)?;
    Ok(path)
  }
}

// Los separadores de ruta no pueden formar parte del prefijo.
fn sanitize(part: &str) -> String {
  part.chars()
      .map(|c| if c == '/' || c == '\\' { '_' } else { c })
      .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_tolerates_line_breaks() {
    let decoded = decode_label("R1", "JVBE\nRi0x\r\nLjQ=").expect("decode");
    assert_eq!(decoded, b"%PDF-1.4");
  }

  #[test]
  fn corrupt_label_is_a_decode_error() {
    let err = decode_label("R1", "not base64!!").unwrap_err();
    assert!(matches!(err, WorkflowError::LabelDecode { ref reference, .. } if reference == "R1"));
  }

  #[test]
  fn written_file_is_named_after_database_and_reference() {
    let writer = LabelWriter::new(&SendContext { database: "erp".into(), employee: None, label_dir: None });
    let path = writer.write("PQ/1", "JVBERi0xLjQ=").expect("write");
    let name = path.file_name().and_then(|n| n.to_str()).unwrap().to_string();
    assert!(name.starts_with("erp-correos-PQ_1-"), "{}", name);
    assert!(name.ends_with(".pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
    std::fs::remove_file(path).unwrap();
  }
}

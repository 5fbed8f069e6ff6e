use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use jingle_core::CoreError;

/// Un documento JSON que es la única fuente de verdad de su colección.
///
/// Cada operación del store es un ciclo completo read-modify-write:
/// ninguna copia en memoria sobrevive a la operación. El `Mutex`
/// serializa a los escritores concurrentes dentro del proceso (el
/// formato no protege contra dos procesos); sin él, dos handlers
/// simultáneos se pisarían el documento entero (last-writer-wins).
pub struct JsonDocument<T> {
  path: PathBuf,
  lock: Mutex<()>,
  _marker: PhantomData<T>,
}

/// Acceso exclusivo al documento mientras el guard viva.
pub struct DocumentGuard<'a, T> {
  doc: &'a JsonDocument<T>,
  _held: MutexGuard<'a, ()>,
}

impl<T> JsonDocument<T>
where
  T: Serialize + DeserializeOwned + Default,
{
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), lock: Mutex::new(()), _marker: PhantomData }
  }

  pub fn lock(&self) -> DocumentGuard<'_, T> {
    // El guard solo protege el orden de acceso; un poison no deja
    // datos a medias que haga falta descartar.
    let held = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
    DocumentGuard { doc: self, _held: held }
  }
}

impl<T> DocumentGuard<'_, T>
where
  T: Serialize + DeserializeOwned + Default,
{
  /// Carga la colección completa.
  ///
  /// "Archivo todavía no existe" es el estado normal del primer
  /// arranque y devuelve la colección vacía. Cualquier otro fallo de
  /// lectura (permisos, JSON corrupto) NO se degrada a vacío: eso
  /// sería perder datos en la siguiente escritura. Se loggea y se
  /// propaga.
  pub fn load(&self) -> Result<T, CoreError> {
    let path = &self.doc.path;
    match std::fs::read_to_string(path) {
      Ok(content) => serde_json::from_str(&content).map_err(|e| {
        tracing::warn!("document {} exists but is unparsable: {e}", path.display());
        CoreError::Storage(format!("unparsable document {}: {e}", path.display()))
      }),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
      Err(e) => {
        tracing::warn!("document {} is unreadable: {e}", path.display());
        Err(CoreError::Storage(format!("unreadable document {}: {e}", path.display())))
      }
    }
  }

  /// Re-persiste la colección completa, de forma atómica.
  pub fn store(&self, value: &T) -> Result<(), CoreError> {
    let path = &self.doc.path;
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .map_err(|e| CoreError::Storage(format!("create {}: {e}", parent.display())))?;
    }

    let json = serde_json::to_string_pretty(value)
      .map_err(|e| CoreError::Storage(format!("encode document {}: {e}", path.display())))?;

    jingle_fs::atomic_write_str(path, &json)
      .map_err(|e| CoreError::Storage(format!("write document {}: {e}", path.display())))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn missing_file_is_an_empty_collection() {
    let tmp = tempdir().unwrap();
    let doc: JsonDocument<Vec<String>> = JsonDocument::new(tmp.path().join("missing.json"));

    assert_eq!(doc.lock().load().unwrap(), Vec::<String>::new());
  }

  #[test]
  fn corrupted_file_is_an_error_not_an_empty_collection() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let doc: JsonDocument<Vec<String>> = JsonDocument::new(path);
    let err = doc.lock().load().unwrap_err();
    assert!(matches!(err, CoreError::Storage(_)));
  }

  #[test]
  fn store_then_load_round_trips() {
    let tmp = tempdir().unwrap();
    let doc: JsonDocument<Vec<String>> = JsonDocument::new(tmp.path().join("d/doc.json"));

    let guard = doc.lock();
    guard.store(&vec!["a".to_string(), "b".to_string()]).unwrap();
    assert_eq!(guard.load().unwrap(), vec!["a".to_string(), "b".to_string()]);
  }
}

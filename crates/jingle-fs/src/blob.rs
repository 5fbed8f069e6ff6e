use std::path::{Path, PathBuf};

use jingle_core::CoreError;
use jingle_core::ports::BlobStore;
use tokio::fs;

/// Blob store sobre un directorio local.
///
/// Adapter del port [`BlobStore`]: recibe bytes y un nombre sugerido,
/// devuelve la ruta final. El dominio no sabe (ni debe saber) dónde
/// viven los archivos.
pub struct FsBlobStore {
  root: PathBuf,
}

impl FsBlobStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }
}

fn storage_err(e: std::io::Error) -> CoreError {
  CoreError::Storage(e.to_string())
}

/// Reduce el nombre sugerido a un nombre de archivo plano: nada de
/// separadores ni `..` que escapen de la raíz.
fn sanitize_name(suggested: &str) -> String {
  match Path::new(suggested).file_name().and_then(|n| n.to_str()) {
    Some(name) if !name.is_empty() && name != ".." => name.to_string(),
    _ => "blob.bin".to_string(),
  }
}

#[async_trait::async_trait]
impl BlobStore for FsBlobStore {
  async fn store(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf, CoreError> {
    fs::create_dir_all(&self.root).await.map_err(storage_err)?;

    let name = sanitize_name(suggested_name);
    let (stem, ext) = match name.rsplit_once('.') {
      Some((s, e)) if !s.is_empty() => (s.to_string(), Some(e.to_string())),
      _ => (name.clone(), None),
    };

    // Ante colisión de nombre, sufijo numérico creciente.
    let mut candidate = self.root.join(&name);
    let mut n = 1u32;
    while fs::try_exists(&candidate).await.map_err(storage_err)? {
      let next = match &ext {
        Some(ext) => format!("{stem}-{n}.{ext}"),
        None => format!("{stem}-{n}"),
      };
      candidate = self.root.join(next);
      n += 1;
    }

    // Mismo protocolo que `atomic_write_str`, en async.
    let tmp = candidate.with_extension("part");
    fs::write(&tmp, bytes).await.map_err(storage_err)?;
    fs::rename(&tmp, &candidate).await.map_err(storage_err)?;

    Ok(candidate)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[tokio::test]
  async fn stores_bytes_under_the_root() {
    let tmp = tempdir().unwrap();
    let store = FsBlobStore::new(tmp.path().join("audio"));

    let path = store.store(b"RIFF....", "take.wav").await.unwrap();
    assert!(path.starts_with(store.root()));
    assert_eq!(std::fs::read(&path).unwrap(), b"RIFF....");
  }

  #[tokio::test]
  async fn avoids_name_collisions() {
    let tmp = tempdir().unwrap();
    let store = FsBlobStore::new(tmp.path());

    let first = store.store(b"a", "take.mp3").await.unwrap();
    let second = store.store(b"b", "take.mp3").await.unwrap();
    assert_ne!(first, second);
    assert_eq!(std::fs::read(&first).unwrap(), b"a");
    assert_eq!(std::fs::read(&second).unwrap(), b"b");
  }

  #[tokio::test]
  async fn strips_path_components_from_the_suggestion() {
    let tmp = tempdir().unwrap();
    let store = FsBlobStore::new(tmp.path().join("audio"));

    let path = store.store(b"x", "../../etc/take.mp3").await.unwrap();
    assert!(path.starts_with(store.root()));
    assert_eq!(path.file_name().unwrap(), "take.mp3");
  }
}

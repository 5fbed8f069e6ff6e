use std::path::PathBuf;

use crate::errors::CoreError;

/// Port del almacén de blobs (audio subido / grabado).
///
/// El adapter decide dónde viven los bytes; el dominio solo necesita
/// la ruta resultante para guardarla en el registro.
#[async_trait::async_trait]
pub trait BlobStore {
  /// Persiste los bytes y devuelve la ruta final.
  ///
  /// `suggested_name` es una pista (nombre + extensión); el adapter
  /// puede ajustarlo para evitar colisiones.
  async fn store(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf, CoreError>;
}

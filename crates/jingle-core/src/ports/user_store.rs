use crate::auth::Identity;
use crate::domain::account::Account;
use crate::domain::ids::{RecordingId, SongId};
use crate::errors::CoreError;

/// Port del almacén de cuentas.
pub trait UserStore {
  // --- Métodos de Comando (Escritura) ---

  /// Crea la cuenta con listas vacías.
  ///
  /// Username o password vacíos => `Validation`; username ya tomado
  /// => `Conflict`.
  fn register(&self, username: &str, password: &str, email: Option<&str>)
  -> Result<(), CoreError>;

  /// Anexa un id de grabación a la lista de la cuenta.
  ///
  /// `Ok(false)` si la cuenta no existe: el guardado de la grabación
  /// no debe fallar por esto.
  fn append_recording(&self, username: &str, id: &RecordingId) -> Result<bool, CoreError>;

  /// Inserta o quita la canción del conjunto de favoritas. Devuelve
  /// si quedó marcada como favorita tras el toggle.
  fn toggle_favorite(&self, username: &str, song_id: &SongId) -> Result<bool, CoreError>;

  // --- Métodos de Consulta (Lectura) ---

  /// Username desconocido => `NotFound`; password incorrecta =>
  /// `Unauthorized`. La identidad resultante no lleva material secreto.
  fn authenticate(&self, username: &str, password: &str) -> Result<Identity, CoreError>;

  fn find_account(&self, username: &str) -> Result<Option<Account>, CoreError>;
}

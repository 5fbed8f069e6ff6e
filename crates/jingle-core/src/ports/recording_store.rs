use crate::domain::ids::{RecordingId, SongId};
use crate::domain::recording::{NewRecording, Recording};
use crate::errors::CoreError;

/// Port del almacén de grabaciones / puntuaciones.
pub trait RecordingStore {
  // --- Métodos de Comando (Escritura) ---

  fn add_recording(&self, new: NewRecording) -> Result<RecordingId, CoreError>;

  /// `Ok(true)` solo si existía y fue removida.
  fn delete_recording(&self, id: &RecordingId) -> Result<bool, CoreError>;

  /// Suma exactamente 1 like y devuelve el contador nuevo.
  /// N llamadas => +N (no es idempotente). Id desconocido => `NotFound`.
  fn like_recording(&self, id: &RecordingId) -> Result<u32, CoreError>;

  /// Agrega un comentario con timestamp asignado por el servidor.
  ///
  /// Texto vacío => `Validation` (se comprueba antes que la existencia
  /// del id). Id desconocido => `NotFound`.
  fn add_comment(&self, id: &RecordingId, author: &str, text: &str) -> Result<(), CoreError>;

  // --- Métodos de Consulta (Lectura) ---

  fn find_recording(&self, id: &RecordingId) -> Result<Option<Recording>, CoreError>;

  fn list_recordings(&self) -> Result<Vec<Recording>, CoreError>;

  fn recordings_by_song(&self, song_id: &SongId) -> Result<Vec<Recording>, CoreError>;

  /// Top-N por puntuación descendente.
  ///
  /// Filtra por canción si `song_id` viene dado; el empate conserva el
  /// orden de inserción (sort estable) y una grabación sin `score`
  /// ordena como 0. `limit` mayor que la colección devuelve todo lo
  /// disponible, nunca es error.
  fn top_recordings(&self, song_id: Option<&SongId>, limit: usize)
  -> Result<Vec<Recording>, CoreError>;
}

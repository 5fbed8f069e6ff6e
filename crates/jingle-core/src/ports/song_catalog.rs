use crate::domain::genre::Genre;
use crate::domain::ids::SongId;
use crate::domain::song::{NewSong, Song};
use crate::errors::CoreError;

/// Port del catálogo de canciones.
///
/// El adapter decide la representación de respaldo (documento JSON,
/// SQL, memoria...), pero los listados deben conservar siempre el
/// orden de inserción de la colección.
pub trait SongCatalog {
  // --- Métodos de Comando (Escritura) ---

  /// Da de alta una canción y devuelve su id.
  ///
  /// Con `dedupe = true` y un `youtube_id` presente, si ya existe una
  /// canción con ese mismo id de video se devuelve el id existente sin
  /// crear nada (dedup-on-insert). Con `dedupe = false` siempre se crea
  /// un registro nuevo. La política activa la elige el caller (config),
  /// nunca el adapter.
  fn add_song(&self, new: NewSong, dedupe: bool) -> Result<SongId, CoreError>;

  /// Borra una canción. `Ok(true)` solo si existía y fue removida.
  fn delete_song(&self, id: &SongId) -> Result<bool, CoreError>;

  /// Suma 1 al play count. `Ok(false)` si el id no existe (no es error:
  /// el caller lo usa best-effort al guardar grabaciones).
  fn increment_play_count(&self, id: &SongId) -> Result<bool, CoreError>;

  // --- Métodos de Consulta (Lectura) ---

  /// Id desconocido => `Ok(None)`, nunca error.
  fn find_song(&self, id: &SongId) -> Result<Option<Song>, CoreError>;

  fn list_songs(&self) -> Result<Vec<Song>, CoreError>;

  /// Listado filtrado por género; `None` equivale a "All".
  fn list_songs_by_genre(&self, genre: Option<Genre>) -> Result<Vec<Song>, CoreError>;
}

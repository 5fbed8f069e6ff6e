mod document;
pub mod recordings;
pub mod songs;
pub mod users;


pub use recordings::JsonRecordingStore;
pub use songs::JsonSongCatalog;
pub use users::JsonUserStore;

use std::path::Path;

use jingle_config::{CONFIG_BACKEND, PATHS, StoreConfig};
use jingle_core::CoreError;

/// Los tres stores JSON del sistema, abiertos sobre el mismo
/// directorio de datos.
///
/// Cada documento es fuente de verdad independiente; no hay
/// transacciones entre ellos (ver las notas de `KaraokeService`).
pub struct JsonStores {
  pub songs: JsonSongCatalog,
  pub recordings: JsonRecordingStore,
  pub users: JsonUserStore,
}

impl JsonStores {
  pub fn open(data_dir: impl AsRef<Path>, cfg: &StoreConfig) -> Self {
    let dir = data_dir.as_ref();
    Self {
      songs: JsonSongCatalog::new(dir.join(&cfg.songs_file)),
      recordings: JsonRecordingStore::new(dir.join(&cfg.recordings_file)),
      users: JsonUserStore::new(dir.join(&cfg.users_file)),
    }
  }

  /// Apertura estándar: paths detectados + sección `[store]` del
  /// archivo de configuración (con defaults si no existe).
  pub fn open_from_config() -> Result<(Self, StoreConfig), CoreError> {
    let cfg: StoreConfig = CONFIG_BACKEND
      .load_section_with_default("store")
      .map_err(|e| CoreError::Storage(e.to_string()))?;
    Ok((Self::open(&PATHS.data_dir, &cfg), cfg))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use jingle_core::domain::song::NewSong;
  use jingle_core::ports::SongCatalog;

  // Único test que toca el singleton PATHS: la variable de entorno
  // debe fijarse antes de la primera (y única) inicialización.
  #[test]
  fn open_from_config_uses_detected_paths_and_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("JINGLE_BASE_DIR", tmp.path()) };

    let (stores, cfg) = JsonStores::open_from_config().unwrap();
    assert!(cfg.dedupe_songs);

    stores
      .songs
      .add_song(
        NewSong { title: "Una".into(), artist: "Alguien".into(), ..NewSong::default() },
        cfg.dedupe_songs,
      )
      .unwrap();

    assert!(tmp.path().join("data").join(&cfg.songs_file).exists());
    unsafe { std::env::remove_var("JINGLE_BASE_DIR") };
  }
}

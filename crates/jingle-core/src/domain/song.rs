use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::genre::Genre;
use crate::domain::ids::SongId;

/// Una canción del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único de la canción dentro del sistema.
  pub id: SongId,
  /// Título de la canción (obligatorio).
  pub title: String,
  /// Intérprete original (obligatorio).
  pub artist: String,
  /// Género musical; `Unknown` si no se especificó.
  #[serde(default)]
  pub genre: Genre,
  /// Letra completa, si el usuario la subió.
  pub lyrics: Option<String>,
  /// Ruta del audio de acompañamiento dentro del blob store.
  pub audio_path: Option<PathBuf>,
  /// Id de video externo (YouTube), producido por el parser de URLs.
  pub youtube_id: Option<String>,
  /// Cuántas veces se ha grabado una performance sobre esta canción.
  /// Solo se incrementa; nunca decrece.
  #[serde(default)]
  pub play_count: u32,
  pub created_at: DateTime<Utc>,
}

/// Datos de entrada para dar de alta una canción.
///
/// El id y el timestamp los asigna el catálogo al insertar.
#[derive(Debug, Clone, Default)]
pub struct NewSong {
  pub title: String,
  pub artist: String,
  pub genre: Genre,
  pub lyrics: Option<String>,
  pub audio_path: Option<PathBuf>,
  pub youtube_id: Option<String>,
}

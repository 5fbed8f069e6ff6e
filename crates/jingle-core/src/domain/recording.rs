use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::{RecordingId, SongId};

/// Una performance grabada por un usuario sobre una canción.
///
/// `song_id` puede apuntar a una canción ya borrada del catálogo:
/// las agregaciones deben tolerarlo sustituyendo el título por
/// el centinela "Unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
  pub id: RecordingId,
  /// Username del dueño de la grabación.
  pub username: String,
  pub song_id: SongId,
  /// Autoevaluación del usuario (1..=10), si la dio.
  pub rating: Option<u8>,
  /// Puntuación del juego, si la performance fue puntuada.
  pub score: Option<u32>,
  /// Precisión porcentual (0.0..=100.0).
  pub accuracy: Option<f32>,
  /// Ruta del audio grabado dentro del blob store.
  pub audio_path: Option<PathBuf>,
  /// Contador de likes; solo se incrementa.
  #[serde(default)]
  pub likes: u32,
  /// Comentarios en orden de llegada (append-only).
  #[serde(default)]
  pub comments: Vec<Comment>,
  pub created_at: DateTime<Utc>,
}

/// Comentario sobre una grabación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
  pub author: String,
  pub text: String,
  pub created_at: DateTime<Utc>,
}

/// Datos de entrada para persistir una grabación nueva.
#[derive(Debug, Clone)]
pub struct NewRecording {
  pub username: String,
  pub song_id: SongId,
  pub rating: Option<u8>,
  pub score: Option<u32>,
  pub accuracy: Option<f32>,
  pub audio_path: Option<PathBuf>,
}

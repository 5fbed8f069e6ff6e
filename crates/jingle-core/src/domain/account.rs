use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::{RecordingId, SongId};

/// Cuenta de usuario.
///
/// El `username` es la clave de la colección y es inmutable.
/// La contraseña se guarda y compara en claro: endurecer esto queda
/// explícitamente fuera del alcance del núcleo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
  pub username: String,
  pub password: String,
  pub email: Option<String>,
  pub created_at: DateTime<Utc>,
  /// Ids de grabaciones propias, en orden de creación.
  #[serde(default)]
  pub recordings: Vec<RecordingId>,
  /// Canciones favoritas. Semántica de conjunto: el toggle inserta
  /// o quita, nunca duplica.
  #[serde(default)]
  pub favorites: Vec<SongId>,
}

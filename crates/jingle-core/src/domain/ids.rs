use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador único de una canción del catálogo.
///
/// Se genera con UUID v4 para garantizar unicidad global; una vez
/// asignado es inmutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    SongId(Uuid::new_v4())
  }

  /// Construye un `SongId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    SongId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for SongId {
  fn default() -> Self {
    SongId::new()
  }
}

impl From<Uuid> for SongId {
  fn from(u: Uuid) -> Self {
    SongId(u)
  }
}

impl From<SongId> for Uuid {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de una grabación / performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordingId(Uuid);

impl RecordingId {
  pub fn new() -> Self {
    RecordingId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    RecordingId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for RecordingId {
  fn default() -> Self {
    RecordingId::new()
  }
}

impl From<Uuid> for RecordingId {
  fn from(u: Uuid) -> Self {
    RecordingId(u)
  }
}

impl From<RecordingId> for Uuid {
  fn from(id: RecordingId) -> Self {
    id.0
  }
}

impl fmt::Display for RecordingId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

// crates/jingle-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de JingleTube.
///
/// Las capas superiores (UI, CLI, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// Campo requerido vacío o con formato inválido.
  #[error("validation error: {0}")]
  Validation(String),

  /// El id / username consultado no existe en su colección.
  #[error("not found")]
  NotFound,

  /// Ya existe un registro con esa clave (p. ej. username duplicado).
  #[error("conflict: {0}")]
  Conflict(String),

  /// Credencial incorrecta o estrategia de login no habilitada.
  #[error("unauthorized")]
  Unauthorized,

  /// Fallo de persistencia (documento ilegible, disco, etc.).
  /// A diferencia de "archivo todavía no existe", esto NO se degrada
  /// a colección vacía: se propaga.
  #[error("storage error: {0}")]
  Storage(String),
}

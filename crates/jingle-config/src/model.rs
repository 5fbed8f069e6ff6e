use serde::{Deserialize, Serialize};

/// Sección `[store]`: nombres de los documentos JSON y política de
/// creación del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
  pub users_file: String,
  pub songs_file: String,
  pub recordings_file: String,
  /// Dedup-on-insert por id de video al dar de alta canciones.
  pub dedupe_songs: bool,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      users_file: "users.json".to_string(),
      songs_file: "songs.json".to_string(),
      recordings_file: "recordings.json".to_string(),
      dedupe_songs: true,
    }
  }
}

/// Configuración del proveedor de identidad delegado (OAuth).
///
/// La detección es una decisión de una sola vez al arranque del
/// proceso: con ambas variables presentes se activa la estrategia
/// delegada, si no, entrada directa.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
  pub client_id: Option<String>,
  pub client_secret: Option<String>,
}

impl AuthConfig {
  pub fn detect() -> Self {
    Self {
      client_id: std::env::var("OAUTH_CLIENT_ID").ok(),
      client_secret: std::env::var("OAUTH_CLIENT_SECRET").ok(),
    }
  }

  pub fn is_delegated_enabled(&self) -> bool {
    self.client_id.is_some() && self.client_secret.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn set(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }

    fn unset(key: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::remove_var(key) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  // Un solo test para las variables OAUTH: los tests corren en
  // paralelo y el entorno es estado compartido del proceso.
  #[test]
  fn delegated_requires_both_oauth_vars() {
    let _id = EnvVarGuard::unset("OAUTH_CLIENT_ID");
    let _secret = EnvVarGuard::unset("OAUTH_CLIENT_SECRET");
    assert!(!AuthConfig::detect().is_delegated_enabled());

    let _id = EnvVarGuard::set("OAUTH_CLIENT_ID", "abc");
    assert!(!AuthConfig::detect().is_delegated_enabled());

    let _secret = EnvVarGuard::set("OAUTH_CLIENT_SECRET", "xyz");
    assert!(AuthConfig::detect().is_delegated_enabled());
  }

  #[test]
  fn store_config_defaults() {
    let cfg = StoreConfig::default();
    assert_eq!(cfg.users_file, "users.json");
    assert_eq!(cfg.songs_file, "songs.json");
    assert_eq!(cfg.recordings_file, "recordings.json");
    assert!(cfg.dedupe_songs);
  }
}

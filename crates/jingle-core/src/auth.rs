use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ports::identity::IdentityProvider;

/// Principal autenticado.
///
/// Solo lleva el username y el origen; nunca material secreto.
/// El caller es dueño de este valor y lo pasa explícitamente en cada
/// llamada: el núcleo no guarda ningún "usuario actual" ambiente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub username: String,
  pub provider: AuthProvider,
}

/// Estrategia con la que se estableció la identidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
  /// Entrada directa: el username tecleado es prueba suficiente.
  DirectEntry,
  /// Token opaco validado por un proveedor externo.
  Delegated,
  /// Cuenta registrada, verificada contra el user store.
  Password,
}

/// Petición de login; la forma debe coincidir con la estrategia activa.
#[derive(Debug, Clone)]
pub enum LoginRequest {
  Direct { username: String },
  Token { token: String },
}

/// Puerta de autenticación del proceso.
///
/// La variante se elige UNA vez al arranque (según haya o no
/// configuración de proveedor delegado) y no cambia después. Hay un
/// único punto de entrada, [`AuthGate::authenticate`], que despacha
/// sobre la variante activa.
pub enum AuthGate<P> {
  DirectEntry,
  Delegated(P),
}

impl<P: IdentityProvider> AuthGate<P> {
  /// Selección de estrategia al arranque del proceso.
  ///
  /// `delegated` viene de la detección de configuración (ver
  /// `jingle-config::AuthConfig`); no se reevalúa en cada llamada.
  pub fn select(delegated: bool, provider: P) -> Self {
    if delegated { AuthGate::Delegated(provider) } else { AuthGate::DirectEntry }
  }

  pub fn provider(&self) -> AuthProvider {
    match self {
      AuthGate::DirectEntry => AuthProvider::DirectEntry,
      AuthGate::Delegated(_) => AuthProvider::Delegated,
    }
  }

  /// Autentica la petición contra la estrategia activa.
  ///
  /// - Entrada directa: recorta espacios; vacío o solo espacios =>
  ///   `Validation`.
  /// - Delegada: delega en el [`IdentityProvider`] inyectado.
  /// - Una petición con forma distinta a la estrategia activa =>
  ///   `Unauthorized`.
  pub async fn authenticate(&self, request: LoginRequest) -> Result<Identity, CoreError> {
    match (self, request) {
      (AuthGate::DirectEntry, LoginRequest::Direct { username }) => {
        let username = username.trim();
        if username.is_empty() {
          return Err(CoreError::Validation("username must not be empty".into()));
        }
        Ok(Identity { username: username.to_string(), provider: AuthProvider::DirectEntry })
      }
      (AuthGate::Delegated(provider), LoginRequest::Token { token }) => {
        provider.validate_token(&token).await
      }
      _ => Err(CoreError::Unauthorized),
    }
  }
}

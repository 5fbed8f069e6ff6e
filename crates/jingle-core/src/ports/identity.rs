use crate::auth::Identity;
use crate::errors::CoreError;

/// Port del proveedor de identidad externo (OAuth delegado).
///
/// La validación real del token contra el proveedor queda fuera del
/// núcleo: este trait lo implementa la integración externa. El núcleo
/// solo despacha hacia él cuando la estrategia delegada está activa.
#[async_trait::async_trait]
pub trait IdentityProvider {
  async fn validate_token(&self, token: &str) -> Result<Identity, CoreError>;
}

/// Proveedor nulo para despliegues sin OAuth configurado.
///
/// Cualquier token se rechaza con `Unauthorized`.
pub struct NoIdentityProvider;

#[async_trait::async_trait]
impl IdentityProvider for NoIdentityProvider {
  async fn validate_token(&self, _token: &str) -> Result<Identity, CoreError> {
    Err(CoreError::Unauthorized)
  }
}

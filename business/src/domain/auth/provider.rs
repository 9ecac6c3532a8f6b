use async_trait::async_trait;

use super::errors::AuthError;

/// An authenticated session as issued by the external auth provider.
#[derive(Debug, Clone)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds until `id_token` expires.
    pub expires_in: u64,
}

/// Port over the managed auth provider. Password verification, lockout
/// and token issuance all happen on the provider's side.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}

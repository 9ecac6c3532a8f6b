use poem_openapi::Object;

use business::domain::auth::provider::Session;

/// Credentials submitted by a distributor signing in.
#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Authenticated session issued by the identity provider.
#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Provider-assigned user id
    pub uid: String,
    /// Account email
    pub email: String,
    /// Bearer token for subsequent requests
    pub id_token: String,
    /// Token used to obtain a fresh id token
    pub refresh_token: String,
    /// Seconds until the id token expires
    pub expires_in: u64,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            uid: session.uid,
            email: session.email,
            id_token: session.id_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
        }
    }
}

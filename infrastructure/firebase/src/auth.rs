use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::auth::errors::AuthError;
use business::domain::auth::provider::{AuthProvider, Session};

use crate::client::FirebaseClient;

pub struct FirebaseAuthProvider {
    client: FirebaseClient,
}

impl FirebaseAuthProvider {
    pub fn new(client: FirebaseClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Maps an Identity Toolkit error code to the domain's closed kind set.
/// Rate-limit codes carry a free-text suffix, hence the prefix match.
fn map_error_code(code: &str) -> AuthError {
    if code.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") {
        return AuthError::TooManyRequests;
    }
    match code {
        "INVALID_EMAIL" => AuthError::InvalidEmail,
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => AuthError::InvalidCredential,
        "EMAIL_NOT_FOUND" => AuthError::UserNotFound,
        "USER_DISABLED" => AuthError::UserDisabled,
        "OPERATION_NOT_ALLOWED" => AuthError::OperationNotAllowed,
        _ => AuthError::Unknown,
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self
            .client
            .client
            .post(self.client.sign_in_url())
            .json(&body)
            .send()
            .await
            .map_err(|_| AuthError::Network)?;

        let status = response.status();
        if status.is_success() {
            let session: SignInResponse =
                response.json().await.map_err(|_| AuthError::Internal)?;
            return Ok(Session {
                uid: session.local_id,
                email: session.email,
                id_token: session.id_token,
                refresh_token: session.refresh_token,
                expires_in: session.expires_in.parse().unwrap_or_default(),
            });
        }

        if status.is_server_error() {
            return Err(AuthError::Internal);
        }

        match response.json::<ErrorBody>().await {
            Ok(body) => Err(map_error_code(&body.error.message)),
            Err(_) => Err(AuthError::Unknown),
        }
    }
}

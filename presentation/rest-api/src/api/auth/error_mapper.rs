use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AuthError::InvalidEmail => (StatusCode::BAD_REQUEST, "ValidationError"),
            AuthError::InvalidCredential | AuthError::UserNotFound => {
                (StatusCode::UNAUTHORIZED, "AuthenticationError")
            }
            AuthError::UserDisabled | AuthError::OperationNotAllowed => {
                (StatusCode::FORBIDDEN, "AuthenticationError")
            }
            AuthError::TooManyRequests => (StatusCode::TOO_MANY_REQUESTS, "RateLimitError"),
            AuthError::Network => (StatusCode::BAD_GATEWAY, "NetworkError"),
            AuthError::Internal | AuthError::Unknown => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.user_message().to_string(),
            }),
        )
    }
}

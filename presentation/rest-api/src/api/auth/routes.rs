use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};

use crate::api::auth::dto::{LoginRequest, SessionResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    sign_in_use_case: Arc<dyn SignInUseCase>,
}

impl AuthApi {
    pub fn new(sign_in_use_case: Arc<dyn SignInUseCase>) -> Self {
        Self { sign_in_use_case }
    }
}

/// Authentication API
///
/// Sign-in against the managed identity provider. Password checks,
/// lockout and token issuance happen on the provider's side.
#[OpenApi]
impl AuthApi {
    /// Sign in with email and password
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = SignInParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.sign_in_use_case.execute(params).await {
            Ok(session) => LoginResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginResponse::BadRequest(json),
                    401 => LoginResponse::Unauthorized(json),
                    403 => LoginResponse::Forbidden(json),
                    429 => LoginResponse::TooManyRequests(json),
                    502 => LoginResponse::BadGateway(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Wire shape of every non-2xx body: a machine-readable `name` plus a
/// `message` the front-end shows as-is (auth errors carry the Portuguese
/// user text, domain errors an i18n code).
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error to the status and body its endpoint returns.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

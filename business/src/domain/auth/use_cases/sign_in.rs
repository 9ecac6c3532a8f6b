use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::provider::Session;

pub struct SignInParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait SignInUseCase: Send + Sync {
    async fn execute(&self, params: SignInParams) -> Result<Session, AuthError>;
}

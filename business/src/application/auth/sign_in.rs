use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::provider::{AuthProvider, Session};
use crate::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use crate::domain::logger::Logger;

pub struct SignInUseCaseImpl {
    pub provider: Arc<dyn AuthProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn execute(&self, params: SignInParams) -> Result<Session, AuthError> {
        let email = params.email.trim();
        if email.is_empty() {
            return Err(AuthError::InvalidEmail);
        }
        if params.password.is_empty() {
            return Err(AuthError::InvalidCredential);
        }

        self.logger.info(&format!("Sign-in attempt for {email}"));

        match self.provider.sign_in(email, &params.password).await {
            Ok(session) => {
                self.logger
                    .info(&format!("Sign-in succeeded for uid {}", session.uid));
                Ok(session)
            }
            Err(e) => {
                self.logger.warn(&format!("Sign-in failed for {email}: {e}"));
                Err(e)
            }
        }
    }
}

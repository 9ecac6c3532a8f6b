/// Closed set of sign-in failure kinds. Each maps to one fixed
/// user-facing message; anything the provider reports outside this set
/// lands on [`AuthError::Unknown`] and the generic message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_email")]
    InvalidEmail,
    #[error("auth.invalid_credential")]
    InvalidCredential,
    #[error("auth.user_not_found")]
    UserNotFound,
    #[error("auth.user_disabled")]
    UserDisabled,
    #[error("auth.too_many_requests")]
    TooManyRequests,
    #[error("auth.operation_not_allowed")]
    OperationNotAllowed,
    #[error("auth.network")]
    Network,
    #[error("auth.internal")]
    Internal,
    #[error("auth.unknown")]
    Unknown,
}

impl AuthError {
    /// The fixed message shown to the distributor on the login screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidEmail => "O email fornecido é inválido.",
            AuthError::InvalidCredential => {
                "E-mail ou senha incorreto(s). Verifique e tente novamente."
            }
            AuthError::UserNotFound => "Nenhum usuário encontrado com este email.",
            AuthError::UserDisabled => {
                "A conta do usuário foi desativada por um administrador."
            }
            AuthError::TooManyRequests => {
                "Muitas tentativas de login. Tente novamente mais tarde."
            }
            AuthError::OperationNotAllowed => {
                "Esta operação não é permitida. Verifique as configurações."
            }
            AuthError::Network => "Erro de rede. Verifique sua conexão e tente novamente.",
            AuthError::Internal => "Ocorreu um erro interno. Tente novamente.",
            AuthError::Unknown => "Ocorreu um erro. Tente novamente.",
        }
    }
}

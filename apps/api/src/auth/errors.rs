use thiserror::Error;

/// Errors raised while authenticating the administrator
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token lifetime out of range")]
    TokenLifetime,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

pub type AuthResult<T> = Result<T, AuthError>;

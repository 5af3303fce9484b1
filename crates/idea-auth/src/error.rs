use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password is required")]
    MissingCredential,

    #[error("Invalid password")]
    InvalidCredential,

    #[error("Authentication required")]
    NotAuthenticated,

    #[error("failed to generate session token: {0}")]
    TokenGeneration(String),
}

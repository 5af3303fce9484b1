//! API error type and its HTTP mapping.
//!
//! Every failure leaves the server as `{"error": "<message>"}`. Internal
//! failures carry a route-specific public message; the underlying detail is
//! logged and never sent to the client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use idea_auth::AuthError;
use idea_core::errors::CoreError;
use idea_core::responses::ErrorResponse;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{public}")]
    Internal { public: &'static str, detail: String },
}

impl ApiError {
    /// Map a service error, using `public` as the message for internal failures.
    pub fn from_core(error: CoreError, public: &'static str) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::NotFound { entity_type, .. } => {
                Self::NotFound(format!("{entity_type} not found"))
            }
            CoreError::Other(source) => Self::internal(public, format!("{source:#}")),
        }
    }

    pub fn internal(public: &'static str, detail: impl ToString) -> Self {
        Self::Internal {
            public,
            detail: detail.to_string(),
        }
    }

    #[must_use]
    pub fn idea_not_found() -> Self {
        Self::NotFound("Idea not found".into())
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::MissingCredential => Self::Validation(error.to_string()),
            AuthError::InvalidCredential | AuthError::NotAuthenticated => {
                Self::Unauthorized(error.to_string())
            }
            AuthError::TokenGeneration(_) => Self::internal("Failed to authenticate", error),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { public, detail } = &self {
            error!(%detail, "{public}");
        }

        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let validation = ApiError::from_core(CoreError::Validation("bad".into()), "ctx");
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from_core(CoreError::idea_not_found(3), "ctx");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "Idea not found");

        let other = ApiError::from_core(CoreError::Other(anyhow::anyhow!("disk full")), "Failed to fetch ideas");
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(other.to_string(), "Failed to fetch ideas");
    }

    #[test]
    fn auth_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(AuthError::MissingCredential).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidCredential).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::NotAuthenticated).to_string(),
            "Authentication required"
        );
    }

    #[test]
    fn internal_detail_is_not_public() {
        let err = ApiError::internal("Failed to export ideas", "zip writer exploded");
        assert_eq!(err.to_string(), "Failed to export ideas");
    }
}

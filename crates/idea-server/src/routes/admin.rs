//! Admin login, logout and session check.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use idea_auth::AuthError;
use idea_core::responses::{AuthCheckResponse, SuccessResponse};
use serde::Deserialize;
use serde_json::Value;
use tower_cookies::Cookies;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::session::{current_session, end_session, set_session_cookie};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Left untyped so a non-string credential is a mismatch, not a bad body.
    pub password: Option<Value>,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(request) = body?;
    let password = match request.password {
        Some(Value::String(password)) => password,
        None | Some(Value::Null) => String::new(),
        Some(_) => {
            warn!("admin login rejected");
            return Err(AuthError::InvalidCredential.into());
        }
    };

    let session = state.sessions.login(&password)?;
    // Replace rather than stack sessions from the same browser.
    if current_session(&cookies, &state).is_some() {
        end_session(&cookies, &state);
    }
    set_session_cookie(&cookies, &state, &session);

    info!("admin logged in");
    Ok(Json(SuccessResponse::new("Authentication successful")))
}

pub async fn logout(State(state): State<Arc<AppState>>, cookies: Cookies) -> Json<SuccessResponse> {
    end_session(&cookies, &state);
    Json(SuccessResponse::new("Logged out successfully"))
}

pub async fn check(State(state): State<Arc<AppState>>, cookies: Cookies) -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse {
        authenticated: current_session(&cookies, &state).is_some(),
    })
}

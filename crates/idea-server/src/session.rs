//! Session cookie transport and the `AdminSession` extractor.
//!
//! The cookie holds only the opaque session token, signed with a key derived
//! from the configured session secret. Session state itself lives in
//! [`idea_auth::SessionStore`].

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use idea_auth::{AuthError, Session};
use sha2::{Digest, Sha512};
use tower_cookies::cookie::SameSite;
use tower_cookies::cookie::time::Duration as CookieDuration;
use tower_cookies::{Cookie, Cookies, Key};

use crate::error::ApiError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "ideabox_session";

/// Derive the 64-byte cookie signing key from an arbitrary-length secret.
#[must_use]
pub fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// The session named by the request's cookie, if it is live.
#[must_use]
pub fn current_session(cookies: &Cookies, state: &AppState) -> Option<Session> {
    cookies
        .signed(&state.cookie_key)
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.validate(cookie.value()))
}

/// Attach the session cookie to the response.
pub fn set_session_cookie(cookies: &Cookies, state: &AppState, session: &Session) {
    let mut cookie = Cookie::new(SESSION_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(CookieDuration::seconds(state.sessions.ttl().num_seconds()));
    if state.secure_cookies {
        cookie.set_secure(true);
        cookie.set_same_site(SameSite::None);
    } else {
        cookie.set_same_site(SameSite::Lax);
    }
    cookies.signed(&state.cookie_key).add(cookie);
}

/// Invalidate the request's session (if any) and expire its cookie.
pub fn end_session(cookies: &Cookies, state: &AppState) {
    let signed = cookies.signed(&state.cookie_key);
    if let Some(cookie) = signed.get(SESSION_COOKIE) {
        state.sessions.logout(cookie.value());
    }
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    signed.remove(removal);
}

/// Proof that the request carries a live admin session.
///
/// Protected handlers take this as their first argument so the session check
/// runs before any body or path validation.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| ApiError::internal("Authentication unavailable", message))?;

        current_session(&cookies, state)
            .map(Self)
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}

use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};

use crate::error::AuthError;

/// Bytes of entropy in a session token.
const TOKEN_BYTES: usize = 32;

/// A server-side admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub authenticated: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start an authenticated session lasting `ttl` from `now`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenGeneration` if the OS random source fails.
    pub fn start(now: DateTime<Utc>, ttl: Duration) -> Result<Self, AuthError> {
        Ok(Self {
            token: generate_token()?,
            authenticated: true,
            created_at: now,
            expires_at: now + ttl,
        })
    }

    /// Authenticated and not yet expired at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.authenticated && now < self.expires_at
    }
}

fn generate_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| AuthError::TokenGeneration(e.to_string()))?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_valid_until_expiry() {
        let now = Utc::now();
        let session = Session::start(now, Duration::hours(24)).unwrap();

        assert!(session.is_valid_at(now));
        assert!(session.is_valid_at(now + Duration::hours(23)));
        assert!(!session.is_valid_at(now + Duration::hours(24)));
    }

    #[test]
    fn unauthenticated_session_is_never_valid() {
        let now = Utc::now();
        let mut session = Session::start(now, Duration::hours(1)).unwrap();
        session.authenticated = false;
        assert!(!session.is_valid_at(now));
    }

    #[test]
    fn tokens_are_unique_and_url_safe() {
        let a = generate_token().unwrap();
        let b = generate_token().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}

//! Process-local session registry.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::session::Session;

/// Checks the admin password and tracks live sessions by token.
pub struct SessionStore {
    admin_password: String,
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(admin_password: impl Into<String>, ttl: Duration) -> Self {
        Self {
            admin_password: admin_password.into(),
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Lifetime granted to new sessions.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Exchange the admin password for a new session.
    ///
    /// # Errors
    ///
    /// `MissingCredential` for an empty password, `InvalidCredential` on mismatch.
    pub fn login(&self, password: &str) -> Result<Session, AuthError> {
        if password.is_empty() {
            return Err(AuthError::MissingCredential);
        }
        if !constant_time_eq(password.as_bytes(), self.admin_password.as_bytes()) {
            warn!("admin login rejected");
            return Err(AuthError::InvalidCredential);
        }

        self.prune_expired();
        let session = Session::start(Utc::now(), self.ttl)?;
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.token.clone(), session.clone());
        debug!("admin session started");
        Ok(session)
    }

    /// Look up a live session. Expired sessions are dropped on sight.
    #[must_use]
    pub fn validate(&self, token: &str) -> Option<Session> {
        let now = Utc::now();
        let session = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()?;

        if session.is_valid_at(now) {
            return Some(session);
        }
        self.logout(token);
        None
    }

    /// Invalidate a session. Unknown tokens are ignored.
    pub fn logout(&self, token: &str) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }

    /// Drop every expired session.
    pub fn prune_expired(&self) {
        let now = Utc::now();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|_, session| session.is_valid_at(now));
    }

    /// Number of sessions currently held, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

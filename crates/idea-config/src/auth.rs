//! Admin credential and session configuration.

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub(crate) const DEFAULT_SESSION_SECRET: &str = "ideabox-secret-key-change-in-production";

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.into()
}

fn default_session_secret() -> String {
    DEFAULT_SESSION_SECRET.into()
}

const fn default_session_ttl_hours() -> u32 {
    24
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared admin password checked on login.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    /// Secret the session cookie signing key is derived from.
    #[serde(default = "default_session_secret")]
    pub session_secret: String,

    /// Lifetime of an admin session.
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
            session_secret: default_session_secret(),
            session_ttl_hours: default_session_ttl_hours(),
        }
    }
}

impl AuthConfig {
    /// Whether the admin password is still the built-in development value.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }

    /// Whether the session secret is still the built-in development value.
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }
}

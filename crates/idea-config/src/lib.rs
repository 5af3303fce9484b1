//! # idea-config
//!
//! Layered configuration loading for ideabox using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`IDEABOX_*` prefix, `__` as separator)
//! 2. Platform environment variables (`PORT`, `ADMIN_PASSWORD`, `SESSION_SECRET`, `APP_ENV`),
//!    with `NODE_ENV` accepted for the environment when `APP_ENV` is unset
//! 3. Project-level `ideabox.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `IDEABOX_SERVER__PORT` -> `server.port`,
//! `IDEABOX_AUTH__ADMIN_PASSWORD` -> `auth.admin_password`, etc.
//! Hosting platforms that inject a bare `PORT` are covered by layer 2.
//!
//! # Usage
//!
//! ```no_run
//! use idea_config::IdeaConfig;
//!
//! let config = IdeaConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.bind_address());
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const CONFIG_FILE: &str = "ideabox.toml";

/// Unprefixed variables and the config keys they set.
const PLATFORM_VARS: [(&str, &str); 4] = [
    ("port", "server.port"),
    ("app_env", "server.environment"),
    ("admin_password", "auth.admin_password"),
    ("session_secret", "auth.session_secret"),
];

/// Legacy name for `APP_ENV`, left over from older deployments.
const LEGACY_ENV_VAR: &str = "node_env";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdeaConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl IdeaConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let platform_keys: Vec<&str> = PLATFORM_VARS.iter().map(|(var, _)| *var).collect();

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(
                Env::raw()
                    .only(&[LEGACY_ENV_VAR])
                    .map(|_| "server.environment".into()),
            )
            .merge(Env::raw().only(&platform_keys).map(|key| {
                PLATFORM_VARS
                    .iter()
                    .find(|(var, _)| key == *var)
                    .map_or_else(|| key.as_str().to_owned().into(), |(_, path)| (*path).into())
            }))
            .merge(Env::prefixed("IDEABOX_").split("__"))
    }

    /// Reject values the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.admin_password.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.admin_password".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.auth.session_secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.session_secret".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.auth.session_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.session_ttl_hours".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.database.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Human-readable warnings for built-in secrets left in place in production.
    #[must_use]
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if !self.server.is_production() {
            return warnings;
        }
        if self.auth.uses_default_password() {
            warnings.push("admin password is the built-in default");
        }
        if self.auth.uses_default_secret() {
            warnings.push("session secret is the built-in default");
        }
        warnings
    }
}

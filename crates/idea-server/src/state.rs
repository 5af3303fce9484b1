//! Shared application state handed to every handler.

use std::path::PathBuf;

use chrono::Duration;
use idea_auth::SessionStore;
use idea_config::IdeaConfig;
use idea_db::IdeaDb;
use idea_db::error::DatabaseError;
use idea_db::service::IdeaService;
use tower_cookies::Key;

use crate::session::derive_cookie_key;

pub struct AppState {
    pub ideas: IdeaService<IdeaDb>,
    pub sessions: SessionStore,
    /// Signs the session cookie.
    pub cookie_key: Key,
    /// `Secure` + `SameSite=None` on the session cookie.
    pub secure_cookies: bool,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Assemble state around an already opened idea store.
    #[must_use]
    pub fn new(db: IdeaDb, config: &IdeaConfig) -> Self {
        Self {
            ideas: IdeaService::new(db),
            sessions: SessionStore::new(
                config.auth.admin_password.clone(),
                Duration::hours(i64::from(config.auth.session_ttl_hours)),
            ),
            cookie_key: derive_cookie_key(&config.auth.session_secret),
            secure_cookies: config.server.is_production(),
            static_dir: PathBuf::from(&config.server.static_dir),
        }
    }

    /// Open the configured database and assemble state.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &IdeaConfig) -> Result<Self, DatabaseError> {
        let db = IdeaDb::open_local(&config.database.path).await?;
        Ok(Self::new(db, config))
    }
}

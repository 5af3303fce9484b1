//! # idea-db
//!
//! libSQL storage for ideabox and the idea service built on top of it.
//!
//! - [`IdeaDb`] owns the libSQL database and runs migrations on open.
//! - [`store::IdeaStore`] is the storage contract; `IdeaDb` implements it in
//!   [`repos::idea`].
//! - [`service::IdeaService`] validates input and maps storage outcomes to
//!   domain errors. It takes its store by value so tests can inject doubles.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for the ideas table.
pub struct IdeaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl IdeaDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the base
    /// schema cannot be created.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let idea_db = Self { db, conn };
        idea_db.run_migrations().await?;
        Ok(idea_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

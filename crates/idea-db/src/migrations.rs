//! Database migration runner.
//!
//! The base schema is embedded at compile time and uses `IF NOT EXISTS`, so
//! re-running it is a no-op. The `status` column migration upgrades tables
//! created before ideas had a triage status.

use std::future::Future;

use idea_core::enums::IdeaStatus;
use tracing::{debug, info, warn};

use crate::IdeaDb;
use crate::error::DatabaseError;

const MIGRATION_001: &str = include_str!("../migrations/001_ideas.sql");

impl IdeaDb {
    /// Run all migrations in sequence.
    ///
    /// Base schema failure is fatal. A failed `status` column migration is
    /// logged and tolerated: the primary table is still usable.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.run_migrations_with(self.migrate_status_column()).await
    }

    /// Apply the base schema, then await `status_step`. Only the base schema
    /// can fail the run.
    pub(crate) async fn run_migrations_with(
        &self,
        status_step: impl Future<Output = Result<bool, DatabaseError>>,
    ) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_ideas: {e}")))?;

        match status_step.await {
            Ok(true) => info!("added status column to ideas table"),
            Ok(false) => debug!("ideas table already has a status column"),
            Err(error) => warn!(%error, "status column migration failed; continuing"),
        }
        Ok(())
    }

    /// Add the `status` column to a legacy `ideas` table and backfill it.
    ///
    /// Returns `true` if the column was added, `false` if it already existed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if the table cannot be inspected or altered.
    pub async fn migrate_status_column(&self) -> Result<bool, DatabaseError> {
        if self.has_column("ideas", "status").await? {
            return Ok(false);
        }

        let default = IdeaStatus::NotImplemented.as_str();
        self.conn
            .execute(
                &format!("ALTER TABLE ideas ADD COLUMN status TEXT DEFAULT '{default}'"),
                (),
            )
            .await
            .map_err(|e| DatabaseError::Migration(format!("add status column: {e}")))?;
        self.conn
            .execute("UPDATE ideas SET status = ?1 WHERE status IS NULL", [default])
            .await
            .map_err(|e| DatabaseError::Migration(format!("backfill status: {e}")))?;

        Ok(true)
    }

    async fn has_column(&self, table: &str, column: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("PRAGMA table_info({table})"), ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("table_info({table}): {e}")))?;
        while let Some(row) = rows.next().await? {
            if row.get::<String>(1)? == column {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use libsql::Builder;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::IdeaStore;

    async fn unmigrated_db() -> IdeaDb {
        let db = Builder::new_local(":memory:").build().await.unwrap();
        let conn = db.connect().unwrap();
        IdeaDb { db, conn }
    }

    #[tokio::test]
    async fn failed_status_migration_is_not_fatal() {
        let db = unmigrated_db().await;

        db.run_migrations_with(async {
            Err(DatabaseError::Migration("add status column: disk I/O error".into()))
        })
        .await
        .unwrap();

        let stored = db.insert("Still works", Utc::now()).await.unwrap();
        let listed = db.list_all().await.unwrap();
        assert_eq!(listed, vec![stored]);
    }
}

//! Idea repository: `IdeaStore` over the `ideas` table.

use chrono::{DateTime, SubsecRound, Utc};

use idea_core::entities::Idea;
use idea_core::enums::IdeaStatus;

use crate::IdeaDb;
use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, parse_datetime};
use crate::store::IdeaStore;

const SELECT_COLS: &str = "id, idea, status, timestamp";

fn row_to_idea(row: &libsql::Row) -> Result<Idea, DatabaseError> {
    // NULL status only survives on legacy rows whose migration failed.
    let status = match row.get::<Option<String>>(2)? {
        Some(label) => label
            .parse()
            .map_err(|_| DatabaseError::Query(format!("Unknown idea status '{label}'")))?,
        None => IdeaStatus::NotImplemented,
    };

    Ok(Idea {
        id: row.get(0)?,
        text: row.get(1)?,
        status,
        submitted_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl IdeaStore for IdeaDb {
    async fn insert(&self, text: &str, submitted_at: DateTime<Utc>) -> Result<Idea, DatabaseError> {
        let submitted_at = submitted_at.trunc_subsecs(3);
        let status = IdeaStatus::NotImplemented;

        let mut rows = self
            .conn()
            .query(
                "INSERT INTO ideas (idea, status, timestamp) VALUES (?1, ?2, ?3) RETURNING id",
                libsql::params![text, status.as_str(), format_timestamp(&submitted_at)],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(Idea {
            id: row.get(0)?,
            text: text.to_string(),
            status,
            submitted_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<Idea>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM ideas ORDER BY timestamp DESC, id DESC"),
                (),
            )
            .await?;

        let mut ideas = Vec::new();
        while let Some(row) = rows.next().await? {
            ideas.push(row_to_idea(&row)?);
        }
        Ok(ideas)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Idea>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM ideas WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_idea(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_status(&self, id: i64, status: IdeaStatus) -> Result<bool, DatabaseError> {
        let changed = self
            .conn()
            .execute(
                "UPDATE ideas SET status = ?1 WHERE id = ?2",
                libsql::params![status.as_str(), id],
            )
            .await?;
        Ok(changed > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .conn()
            .execute("DELETE FROM ideas WHERE id = ?1", [id])
            .await?;
        Ok(changed > 0)
    }
}

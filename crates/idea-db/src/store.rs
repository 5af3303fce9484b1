//! Storage contract for ideas.
//!
//! `IdeaService` is generic over this trait. `IdeaDb` is the production
//! implementation; tests may substitute an in-memory store.

use std::future::Future;

use chrono::{DateTime, Utc};
use idea_core::entities::Idea;
use idea_core::enums::IdeaStatus;

use crate::error::DatabaseError;

/// Durable table of ideas keyed by a store-assigned integer id.
///
/// Every method is a single atomic operation whose effect is visible to
/// subsequent calls.
pub trait IdeaStore: Send + Sync {
    /// Insert an idea with status `NotImplemented` and return the stored record.
    fn insert(
        &self,
        text: &str,
        submitted_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Idea, DatabaseError>> + Send;

    /// All ideas, newest first. Ties on `submitted_at` are broken by descending id.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Idea>, DatabaseError>> + Send;

    fn get_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Idea>, DatabaseError>> + Send;

    /// Set the status of one idea. Returns whether a record changed.
    fn update_status(
        &self,
        id: i64,
        status: IdeaStatus,
    ) -> impl Future<Output = Result<bool, DatabaseError>> + Send;

    /// Hard-delete one idea. Returns whether a record existed.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<bool, DatabaseError>> + Send;
}

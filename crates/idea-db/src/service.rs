//! Idea service: validation and outcome mapping over an [`IdeaStore`].
//!
//! The service is authorization-agnostic. The HTTP layer only routes to
//! `list_all`, `update_status`, `delete` and `export_all` after the admin
//! session check has passed.

use chrono::Utc;
use tracing::info;

use idea_core::entities::Idea;
use idea_core::enums::IdeaStatus;
use idea_core::errors::CoreError;

use crate::store::IdeaStore;

/// CRUD and triage operations for ideas.
pub struct IdeaService<S> {
    store: S,
}

impl<S: IdeaStore> IdeaService<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Submit a new idea. The text is trimmed; status is always `NotImplemented`.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if the trimmed text is empty, `CoreError::Other`
    /// if the store fails.
    pub async fn submit(&self, raw_text: &str) -> Result<Idea, CoreError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation("Idea cannot be empty".into()));
        }

        let idea = self.store.insert(text, Utc::now()).await?;
        info!(id = idea.id, "idea submitted");
        Ok(idea)
    }

    /// All ideas, newest first.
    ///
    /// # Errors
    ///
    /// `CoreError::Other` if the store fails.
    pub async fn list_all(&self) -> Result<Vec<Idea>, CoreError> {
        Ok(self.store.list_all().await?)
    }

    /// Set the triage status of an idea from its label.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` for an unknown label (checked before the store
    /// is touched), `CoreError::NotFound` if no idea has this id.
    pub async fn update_status(&self, id: i64, raw_status: &str) -> Result<IdeaStatus, CoreError> {
        let status: IdeaStatus = raw_status.parse()?;

        if !self.store.update_status(id, status).await? {
            return Err(CoreError::idea_not_found(id));
        }
        info!(id, %status, "idea status updated");
        Ok(status)
    }

    /// Permanently delete an idea.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no idea has this id.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        if !self.store.delete_by_id(id).await? {
            return Err(CoreError::idea_not_found(id));
        }
        info!(id, "idea deleted");
        Ok(())
    }

    /// The full idea list in export order (same as [`Self::list_all`]).
    ///
    /// # Errors
    ///
    /// `CoreError::Other` if the store fails.
    pub async fn export_all(&self) -> Result<Vec<Idea>, CoreError> {
        self.list_all().await
    }
}

//! Cross-cutting error types for ideabox.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `AuthError`) are defined in
//! their respective crates. The HTTP status mapping lives in `idea-server`
//! where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any ideabox crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (empty text, unknown status).
    #[error("{0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a missing idea.
    #[must_use]
    pub fn idea_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Idea".into(),
            id: id.to_string(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::IdeaStatus;

/// A user-submitted idea with its triage status.
///
/// Field names on the wire follow the `ideas` table columns (`idea`,
/// `timestamp`) so existing admin front-ends keep working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Idea {
    pub id: i64,
    #[serde(rename = "idea")]
    pub text: String,
    pub status: IdeaStatus,
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
}

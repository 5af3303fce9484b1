//! Status enum for ideas.
//!
//! Statuses serialize with their human labels (`"Not Implemented"`), which
//! are also the values stored in the `status` column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Triage outcome assigned to an idea by the admin.
///
/// Any status may be set from any other; there is no transition graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdeaStatus {
    #[default]
    #[serde(rename = "Not Implemented")]
    NotImplemented,
    #[serde(rename = "Implemented")]
    Implemented,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl IdeaStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::NotImplemented, Self::Implemented, Self::Rejected];

    /// Return the label used in SQL storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotImplemented => "Not Implemented",
            Self::Implemented => "Implemented",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaStatus {
    type Err = CoreError;

    /// Parse an exact status label. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation("Invalid status".into()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Not Implemented", IdeaStatus::NotImplemented)]
    #[case("Implemented", IdeaStatus::Implemented)]
    #[case("Rejected", IdeaStatus::Rejected)]
    fn parses_every_label(#[case] label: &str, #[case] expected: IdeaStatus) {
        assert_eq!(label.parse::<IdeaStatus>().unwrap(), expected);
        assert_eq!(expected.to_string(), label);
    }

    #[rstest]
    #[case("")]
    #[case("implemented")]
    #[case("NotImplemented")]
    #[case("Done")]
    #[case(" Rejected")]
    fn rejects_unknown_labels(#[case] label: &str) {
        let err = label.parse::<IdeaStatus>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&IdeaStatus::NotImplemented).unwrap();
        assert_eq!(json, "\"Not Implemented\"");
        let recovered: IdeaStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(recovered, IdeaStatus::Rejected);
    }

    #[test]
    fn default_is_not_implemented() {
        assert_eq!(IdeaStatus::default(), IdeaStatus::NotImplemented);
    }
}

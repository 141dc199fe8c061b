use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a project. Serialized with the labels shown to users.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Status {
    Active,
    #[serde(rename = "In Progress")]
    InProgress,
    Planning,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown project status {0:?}")]
pub struct StatusError(pub String);

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::InProgress, Status::Planning];

    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::InProgress => "In Progress",
            Status::Planning => "Planning",
        }
    }

    /// CSS classes of the badge displayed next to a project.
    pub fn badge_classes(self) -> &'static str {
        match self {
            Status::Active => "bg-emerald-100 text-emerald-800 border-emerald-200",
            Status::InProgress => "bg-blue-100 text-blue-800 border-blue-200",
            Status::Planning => "bg-amber-100 text-amber-800 border-amber-200",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| StatusError(s.to_owned()))
    }
}

#[test]
fn test_labels() {
    for status in Status::ALL {
        assert_eq!(status.label().parse::<Status>().unwrap(), status);
    }
    assert!("active".parse::<Status>().is_err());
    assert!("Completed".parse::<Status>().is_err());
    assert_eq!(
        serde_json::to_string(&Status::InProgress).unwrap(),
        "\"In Progress\""
    );
}

#[test]
fn test_badges_are_distinct() {
    assert_ne!(Status::Active.badge_classes(), Status::InProgress.badge_classes());
    assert_ne!(Status::InProgress.badge_classes(), Status::Planning.badge_classes());
    assert!(Status::Planning.badge_classes().contains("amber"));
}

use super::{Impact, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One humanitarian initiative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub beneficiaries: u64,
    pub status: Status,
    pub impact: Impact,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl Project {
    /// Fields searched by free-text queries, in match priority order.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.name, &self.location, &self.description, &self.category]
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
impl Project {
    /// Minimal record for unit tests.
    pub(crate) fn sample(id: u32, name: &str) -> Self {
        Project {
            id: ProjectId(id),
            name: name.into(),
            description: String::new(),
            location: String::new(),
            beneficiaries: 0,
            status: Status::Planning,
            impact: Impact::NotMeasured,
            category: String::new(),
            icon: String::new(),
            color: String::new(),
        }
    }
}

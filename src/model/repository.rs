use super::{Project, ProjectId, reference};
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DatasetError {
    #[error("project id {0} is used more than once")]
    DuplicateId(ProjectId),
    #[error("project ids must be positive")]
    ZeroId,
    #[error("project {0} has an empty name")]
    EmptyName(ProjectId),
}

/// Immutable, ordered collection of projects.
///
/// Cloning is cheap: every clone shares the same records. Derived views
/// (filtered or sorted lists, statistics) borrow from it and never modify it.
#[derive(Clone, Debug)]
pub struct Projects {
    projects: Arc<[Project]>,
}

impl Projects {
    pub fn new(projects: Vec<Project>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for p in &projects {
            if p.id.0 == 0 {
                return Err(DatasetError::ZeroId);
            }
            if p.name.trim().is_empty() {
                return Err(DatasetError::EmptyName(p.id));
            }
            if !seen.insert(p.id) {
                return Err(DatasetError::DuplicateId(p.id));
            }
        }
        Ok(Self {
            projects: projects.into(),
        })
    }

    /// The built-in dataset published on the site.
    pub fn reference() -> Self {
        Self {
            projects: reference::projects().into(),
        }
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

impl Deref for Projects {
    type Target = [Project];

    fn deref(&self) -> &[Project] {
        &self.projects
    }
}

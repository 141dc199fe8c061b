use crate::config::Config;
use crate::model::Projects;
use std::sync::Arc;
use std::time::Instant;

/// Shared by every handler. Nothing in it is mutable, so clones need no
/// locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub projects: Projects,
    pub config: Arc<Config>,
    pub started: Instant,
}

impl AppState {
    pub fn new(projects: Projects, config: Config) -> Self {
        Self {
            projects,
            config: Arc::new(config),
            started: Instant::now(),
        }
    }
}

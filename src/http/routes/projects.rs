//! Project listing and statistics.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::listing::Listing;
use crate::model::{Project, ProjectId};
use crate::stats::{CategoryStats, StatsSummary, by_category, compute_stats};

/// A project as sent to the site, with its status badge classes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub status_badge: &'static str,
}

impl<'a> From<&'a Project> for ProjectView<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            project,
            status_badge: project.status.badge_classes(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectList<'a> {
    pub count: usize,
    pub projects: Vec<ProjectView<'a>>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:id", get(get_project))
        .route("/api/stats", get(stats))
        .route("/api/categories", get(categories))
}

/// GET /api/projects?search=&region=&sort=&order=
async fn list_projects(
    State(state): State<AppState>,
    query: Result<Query<Listing>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(listing) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let projects = listing
        .apply(&state.projects)
        .into_iter()
        .map(ProjectView::from)
        .collect::<Vec<_>>();
    tracing::debug!(search = %listing.search, matches = projects.len(), "listing projects");
    to_json(&ProjectList {
        count: projects.len(),
        projects,
    })
}

/// GET /api/projects/:id
async fn get_project(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let project = state
        .projects
        .get(ProjectId(id))
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;
    to_json(&ProjectView::from(project))
}

/// GET /api/stats, always computed over the whole repository.
async fn stats(State(state): State<AppState>) -> Json<StatsSummary> {
    Json(compute_stats(&state.projects).summary())
}

/// GET /api/categories
async fn categories(State(state): State<AppState>) -> Json<Vec<CategoryStats>> {
    Json(by_category(&state.projects))
}

// Views borrow from the repository, so they are rendered before the state
// handle is released.
fn to_json<T: Serialize>(value: &T) -> Result<Json<serde_json::Value>, AppError> {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|e| AppError::Internal(format!("cannot serialize response: {e}")))
}

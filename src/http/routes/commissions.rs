//! Commission requests sent from the contact form.
//!
//! Requests are only checked for their required fields and logged; nothing
//! is stored.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub vision: String,
    pub timeline: Option<String>,
    pub budget: Option<String>,
    #[serde(default)]
    pub rhodium_collateral: bool,
}

#[derive(Debug, Serialize)]
pub struct Received {
    pub status: &'static str,
}

impl CommissionRequest {
    fn check_required(&self) -> Result<(), AppError> {
        for (label, value) in [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Vision", &self.vision),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{label} is required")));
            }
        }
        Ok(())
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/commissions", post(submit))
}

/// POST /api/commissions
async fn submit(
    body: Result<Json<CommissionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Received>), AppError> {
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    request.check_required()?;
    tracing::info!(
        name = %request.name,
        email = %request.email,
        timeline = request.timeline.as_deref().unwrap_or("unspecified"),
        budget = request.budget.as_deref().unwrap_or("unspecified"),
        rhodium_collateral = request.rhodium_collateral,
        "commission request submitted"
    );
    Ok((StatusCode::ACCEPTED, Json(Received { status: "received" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, vision: &str) -> CommissionRequest {
        CommissionRequest {
            name: name.into(),
            email: email.into(),
            vision: vision.into(),
            timeline: None,
            budget: None,
            rhodium_collateral: false,
        }
    }

    #[test]
    fn required_fields() {
        assert!(request("Ada", "ada@example.com", "A library").check_required().is_ok());
        let err = request("", "ada@example.com", "A library").check_required().unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
        let err = request("Ada", " ", "A library").check_required().unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
        let err = request("Ada", "ada@example.com", "").check_required().unwrap_err();
        assert_eq!(err.to_string(), "Vision is required");
    }
}

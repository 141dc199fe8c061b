//! Mock design generation.
//!
//! Answers with a canned design after an artificial delay. The prompt only
//! appears in the output text; nothing is derived from it.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::AppError;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Value,
}

impl GenerateRequest {
    /// The prompt as text. `None` for a missing, `null`, `false`, zero or
    /// empty prompt. Numbers and booleans are spelled out, other values are
    /// taken as their JSON text.
    pub fn prompt_text(&self) -> Option<String> {
        match &self.prompt {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDesign {
    pub output: String,
    pub layout: Layout,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    #[serde(rename = "type")]
    pub kind: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Hero { content: String },
    Features { items: Vec<String> },
    Cta { text: String },
}

impl GeneratedDesign {
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            output: format!(
                "Generated design for: \"{prompt}\"\n\n\
                 Layout: Hero section with gradient background, navigation bar, and call-to-action button.\n\n\
                 Components: Card grid for features, testimonial carousel, footer with links.\n\n\
                 Colors: Primary cyan (#06b6d4), secondary slate (#64748b), accent sky (#0ea5e9).\n\n\
                 Fonts: Inter for headings, system font for body."
            ),
            layout: Layout {
                kind: "page".to_owned(),
                sections: vec![
                    Section::Hero {
                        content: "Welcome message".to_owned(),
                    },
                    Section::Features {
                        items: vec![
                            "Feature 1".to_owned(),
                            "Feature 2".to_owned(),
                            "Feature 3".to_owned(),
                        ],
                    },
                    Section::Cta {
                        text: "Get Started".to_owned(),
                    },
                ],
            },
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate-design", post(generate_design))
}

/// POST /api/generate-design
///
/// The body is decoded as JSON whatever its content type.
async fn generate_design(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GeneratedDesign>, AppError> {
    let body =
        body.map_err(|e| AppError::Internal(format!("cannot read generation request: {e}")))?;
    let request: GenerateRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("cannot decode generation request: {e}")))?;
    let prompt = request
        .prompt_text()
        .ok_or_else(|| AppError::BadRequest("Prompt is required".to_owned()))?;
    tracing::info!(prompt_len = prompt.len(), "generating design");
    tokio::time::sleep(state.config.generation.delay()).await;
    Ok(Json(GeneratedDesign::for_prompt(&prompt)))
}

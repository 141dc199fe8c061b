//! # HTTP service
//!
//! | Route                       | Module                    |
//! |-----------------------------|---------------------------|
//! | `GET /api/projects`         | [`routes::projects`]      |
//! | `GET /api/projects/:id`     | [`routes::projects`]      |
//! | `GET /api/stats`            | [`routes::projects`]      |
//! | `GET /api/categories`       | [`routes::projects`]      |
//! | `POST /api/generate-design` | [`routes::generate`]      |
//! | `POST /api/commissions`     | [`routes::commissions`]   |
//! | `GET /api/health`           | [`routes::health`]        |
//!
//! Every response carries the site's security headers.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub use self::error::AppError;
pub use self::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::projects::router())
        .merge(routes::generate::router())
        .merge(routes::commissions::router())
        .merge(routes::health::router())
        .layer(SetResponseHeaderLayer::overriding(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

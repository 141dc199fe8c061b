//! Health check used by container probes and monitoring.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::http::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: &'static str,
    pub environment: String,
    /// Seconds since the service started.
    pub uptime: f64,
    pub memory: MemoryUsage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
}

/// Process memory, when the platform exposes it.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub resident_bytes: Option<u64>,
    pub virtual_bytes: Option<u64>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

/// GET /api/health
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        timestamp: Utc::now(),
        service: state.config.server.service.clone(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.server.environment.clone(),
        uptime: state.started.elapsed().as_secs_f64(),
        memory: memory_usage(),
        database: state.config.dataset.database_url.as_ref().map(|_| "configured"),
    })
}

fn memory_usage() -> MemoryUsage {
    std::fs::read_to_string("/proc/self/status")
        .map(|status| parse_proc_status(&status))
        .unwrap_or_default()
}

fn parse_proc_status(status: &str) -> MemoryUsage {
    let field = |name: &str| {
        status
            .lines()
            .find_map(|line| line.strip_prefix(name))
            .and_then(|rest| rest.trim().strip_suffix("kB"))
            .and_then(|kb| kb.trim().parse::<u64>().ok())
            .map(|kb| kb * 1024)
    };
    MemoryUsage {
        resident_bytes: field("VmRSS:"),
        virtual_bytes: field("VmSize:"),
    }
}

#[test]
fn test_parse_proc_status() {
    let status = "Name:\tchips\nVmSize:\t  123456 kB\nVmRSS:\t    2048 kB\nThreads:\t4\n";
    assert_eq!(
        parse_proc_status(status),
        MemoryUsage {
            resident_bytes: Some(2048 * 1024),
            virtual_bytes: Some(123_456 * 1024),
        }
    );
    assert_eq!(parse_proc_status("Name:\tchips\n"), MemoryUsage::default());
}

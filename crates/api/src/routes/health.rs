use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the store cannot be read.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
}

/// What backs the key-value store and whether it answers reads.
#[derive(Serialize)]
pub struct StoreHealth {
    pub backend: &'static str,
    /// Backing file for durable stores, `null` for the in-memory one.
    pub path: Option<String>,
    pub healthy: bool,
}

/// GET /health -- 200 while the store answers reads, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let kv = state.store.kv();
    let healthy = match learnpath_db::health_check(&state.store).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(backend = kv.backend(), error = %e, "Store health probe failed");
            false
        }
    };

    let (code, status) = if healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store: StoreHealth {
            backend: kv.backend(),
            path: kv.location().map(|p| p.display().to_string()),
            healthy,
        },
    };
    (code, Json(body))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

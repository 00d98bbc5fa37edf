//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use familytree_database::connection::health_check;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let database_ok = match health_check(&state.db_pool).await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };
    let storage_ok = state.photo_store.health_check().await.unwrap_or(false);

    let healthy = database_ok && storage_ok;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::ok(HealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: if database_ok { "connected" } else { "unavailable" }.to_string(),
            storage: if storage_ok { "available" } else { "unavailable" }.to_string(),
        })),
    )
}

//! Health and queue observability endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use siphon_core::submission::Priority;

use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Jobs currently waiting in each priority lane. Running batches are no
/// longer in the queue and don't show up here.
#[derive(Serialize, ToSchema)]
pub struct QueueStatusResponse {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/queue/status",
    tag = "Health",
    responses(
        (status = 200, description = "Per-lane queue depths", body = QueueStatusResponse)
    )
)]
pub async fn queue_status(State(state): State<Arc<AppState>>) -> Json<QueueStatusResponse> {
    let queue = state.queue.lock().unwrap();
    Json(QueueStatusResponse {
        high: queue.depth(Priority::High),
        medium: queue.depth(Priority::Medium),
        low: queue.depth(Priority::Low),
        total: queue.total_depth(),
    })
}

//! Handlers for identifier ingestion and submission status queries.
//!
//! Wire DTOs use camelCase keys for compatibility with the original
//! service. Validation happens here, before anything touches the core:
//! an empty id list or an unknown priority never reaches the store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use siphon_core::status::OverallStatus;
use siphon_core::submission::{BatchStatus, Priority, Submission};
use siphon_core::SiphonError;

use crate::state::AppState;

use super::ErrorResponse;

// ── Wire types ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct IngestRequest {
    /// Identifiers to ingest, in order.
    pub ids: Vec<i64>,
    /// One of "HIGH", "MEDIUM", "LOW".
    #[schema(example = "HIGH")]
    pub priority: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    #[schema(value_type = String)]
    pub ingestion_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    #[schema(value_type = String)]
    pub batch_id: Uuid,
    pub ids: Vec<i64>,
    #[schema(value_type = String, example = "pending")]
    pub status: BatchStatus,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[schema(value_type = String)]
    pub ingestion_id: Uuid,
    #[schema(value_type = String, example = "running")]
    pub status: OverallStatus,
    #[schema(value_type = String, example = "HIGH")]
    pub priority: Priority,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    pub batches: Vec<BatchEntry>,
}

impl StatusResponse {
    fn from_submission(submission: &Submission) -> Self {
        Self {
            ingestion_id: submission.id,
            status: submission.overall_status(),
            priority: submission.priority,
            created_at: submission.created_at,
            batches: submission
                .batches
                .iter()
                .map(|(&batch_id, batch)| BatchEntry {
                    batch_id,
                    ids: batch.ids.clone(),
                    status: batch.status,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    #[schema(value_type = String)]
    pub ingestion_id: Uuid,
    #[schema(value_type = String, example = "HIGH")]
    pub priority: Priority,
    #[schema(value_type = String, example = "pending")]
    pub status: OverallStatus,
    pub batch_count: usize,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

// ── Helpers ──────────────────────────────────────────────────────────

fn bad_request(e: SiphonError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// ── Handlers ─────────────────────────────────────────────────────────

/// POST /ingest — split the ids into batches, register the submission,
/// and enqueue every batch at the requested priority.
#[utoipa::path(
    post,
    path = "/ingest",
    tag = "Ingestion",
    request_body = IngestRequest,
    responses(
        (status = 200, description = "Submission accepted", body = IngestResponse),
        (status = 400, description = "Empty id list or invalid priority", body = ErrorResponse)
    )
)]
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IngestRequest>,
) -> Result<Json<IngestResponse>, (StatusCode, Json<ErrorResponse>)> {
    if req.ids.is_empty() {
        return Err(bad_request(SiphonError::EmptyIdList));
    }
    let priority: Priority = req.priority.parse().map_err(bad_request)?;

    let batches = siphon_dispatch::split(&req.ids, state.config.ingestion.batch_size);
    let batch_count = batches.len();

    let ingestion_id = {
        let mut queue = state.queue.lock().unwrap();
        state.store.create(priority, batches, &mut queue)
    };

    info!(
        %ingestion_id,
        priority = %priority,
        ids = req.ids.len(),
        batches = batch_count,
        "submission accepted"
    );
    Ok(Json(IngestResponse { ingestion_id }))
}

/// GET /status/{ingestionId} — aggregate status plus per-batch detail.
#[utoipa::path(
    get,
    path = "/status/{ingestionId}",
    tag = "Ingestion",
    params(
        ("ingestionId" = String, Path, description = "Submission id returned by POST /ingest")
    ),
    responses(
        (status = 200, description = "Submission status", body = StatusResponse),
        (status = 404, description = "Unknown ingestion id", body = ErrorResponse)
    )
)]
pub async fn status(
    State(state): State<Arc<AppState>>,
    Path(ingestion_id): Path<Uuid>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    let submission = state.store.get(&ingestion_id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Ingestion ID not found".to_string(),
            }),
        )
    })?;
    Ok(Json(StatusResponse::from_submission(&submission)))
}

/// GET /submissions — all submissions in creation order.
#[utoipa::path(
    get,
    path = "/submissions",
    tag = "Ingestion",
    responses(
        (status = 200, description = "Creation-ordered submission summaries", body = Vec<SubmissionSummary>)
    )
)]
pub async fn submissions_list(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<SubmissionSummary>> {
    let summaries = state
        .store
        .list()
        .iter()
        .map(|s| SubmissionSummary {
            ingestion_id: s.id,
            priority: s.priority,
            status: s.overall_status(),
            batch_count: s.batches.len(),
            created_at: s.created_at,
        })
        .collect();
    Json(summaries)
}

//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "siphon API",
        version = "0.1.0",
        description = "Bulk identifier ingestion with priority-scheduled batch processing.",
    ),
    tags(
        (name = "Ingestion", description = "Submit identifier sets and poll their aggregate status"),
        (name = "Health", description = "Server readiness and queue depths"),
    ),
    paths(
        crate::api::ingest::ingest,
        crate::api::ingest::status,
        crate::api::ingest::submissions_list,
        crate::api::health::health,
        crate::api::health::queue_status,
    ),
    components(schemas(
        crate::api::ErrorResponse,
        crate::api::ingest::IngestRequest,
        crate::api::ingest::IngestResponse,
        crate::api::ingest::StatusResponse,
        crate::api::ingest::BatchEntry,
        crate::api::ingest::SubmissionSummary,
        crate::api::health::HealthResponse,
        crate::api::health::QueueStatusResponse,
    ))
)]
pub struct ApiDoc;

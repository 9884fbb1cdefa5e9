//! Domain-focused API endpoint modules.
//!
//! Shared error shape lives here in mod.rs.

pub mod doc;
mod health;
mod ingest;

use serde::Serialize;
use utoipa::ToSchema;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// ── Re-exports ───────────────────────────────────────────────────
// Preserves flat `api::foo` import paths used by router.rs.

pub use health::{health, queue_status};
pub use ingest::{ingest, status, submissions_list};

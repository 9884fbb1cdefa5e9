use thiserror::Error;
use uuid::Uuid;

use crate::submission::BatchStatus;

#[derive(Error, Debug)]
pub enum SiphonError {
    #[error("Ingestion ID not found")]
    SubmissionNotFound(Uuid),

    #[error("invalid priority: {0} (expected HIGH, MEDIUM, or LOW)")]
    InvalidPriority(String),

    #[error("ids must be a non-empty array")]
    EmptyIdList,

    #[error("unknown batch {batch_id} in submission {submission_id}")]
    UnknownBatch {
        submission_id: Uuid,
        batch_id: Uuid,
    },

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: BatchStatus,
        to: BatchStatus,
    },
}

impl SiphonError {
    /// Whether this error indicates the store and the dispatch queue have
    /// diverged. These are never expected during normal operation.
    pub fn is_consistency_violation(&self) -> bool {
        matches!(
            self,
            SiphonError::UnknownBatch { .. } | SiphonError::InvalidTransition { .. }
        )
    }
}

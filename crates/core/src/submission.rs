//! Domain types for submissions and their batches.
//!
//! A submission is one client request to ingest an ordered set of
//! identifiers; it is created atomically with all of its batches and is
//! mutated only through batch status transitions driven by the scheduler.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SiphonError;
use crate::status::OverallStatus;

// ── Priority ─────────────────────────────────────────────────────────

/// Dispatch priority of a submission, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Lane scan order for the dispatcher. Higher priorities always win queue
/// position; a sustained HIGH stream can starve the lower lanes.
pub const DISPATCH_ORDER: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

impl Priority {
    /// Number of priority lanes.
    pub const COUNT: usize = 3;

    /// Index of this priority's lane in a fixed-size lane array.
    pub fn lane_index(self) -> usize {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = SiphonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            other => Err(SiphonError::InvalidPriority(other.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Batch status ─────────────────────────────────────────────────────

/// Lifecycle state of a single batch.
///
/// Transitions are monotonic and one-directional:
/// `pending -> running -> done`. No regression, no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Pending,
    Running,
    Done,
}

impl BatchStatus {
    /// Whether `next` is a legal successor state.
    pub fn can_transition_to(self, next: BatchStatus) -> bool {
        matches!(
            (self, next),
            (BatchStatus::Pending, BatchStatus::Running) | (BatchStatus::Running, BatchStatus::Done)
        )
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStatus::Pending => write!(f, "pending"),
            BatchStatus::Running => write!(f, "running"),
            BatchStatus::Done => write!(f, "done"),
        }
    }
}

// ── Submission ───────────────────────────────────────────────────────

/// A contiguous, order-preserving chunk of a submission's identifiers;
/// the unit of scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub ids: Vec<i64>,
    pub status: BatchStatus,
}

/// One client-initiated ingestion request and its batches.
///
/// `batches` uses `IndexMap` so iteration order is split order while
/// lookups by batch id stay O(1).
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub priority: Priority,
    pub batches: IndexMap<Uuid, Batch>,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Build a submission from pre-split id batches, all `pending`.
    /// Batch ids are assigned here, in split order.
    pub fn new(priority: Priority, id_batches: Vec<Vec<i64>>) -> Self {
        let batches = id_batches
            .into_iter()
            .map(|ids| {
                (
                    Uuid::new_v4(),
                    Batch {
                        ids,
                        status: BatchStatus::Pending,
                    },
                )
            })
            .collect();
        Self {
            id: Uuid::new_v4(),
            priority,
            batches,
            created_at: Utc::now(),
        }
    }

    /// Aggregate status across all batches, computed on read.
    pub fn overall_status(&self) -> OverallStatus {
        let statuses: Vec<BatchStatus> = self.batches.values().map(|b| b.status).collect();
        crate::status::aggregate(&statuses)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

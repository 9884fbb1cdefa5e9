//! Status aggregation for submissions.
//!
//! Pure read-side computation: the overall status of a submission is
//! derived from its batch statuses at query time, never stored.

use serde::{Deserialize, Serialize};

use crate::submission::BatchStatus;

/// Aggregate status of a whole submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Pending,
    Running,
    Done,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallStatus::Pending => write!(f, "pending"),
            OverallStatus::Running => write!(f, "running"),
            OverallStatus::Done => write!(f, "done"),
        }
    }
}

/// Collapse a set of batch statuses into one overall status.
///
/// All pending -> pending; all done -> done; any mixture -> running.
/// An empty slice aggregates to `pending` (vacuously all-pending); the
/// API boundary rejects empty submissions, so this case is unreachable
/// through normal operation.
pub fn aggregate(statuses: &[BatchStatus]) -> OverallStatus {
    if statuses.iter().all(|s| *s == BatchStatus::Pending) {
        OverallStatus::Pending
    } else if statuses.iter().all(|s| *s == BatchStatus::Done) {
        OverallStatus::Done
    } else {
        OverallStatus::Running
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::BatchStatus::{Done, Pending, Running};

    #[test]
    fn test_all_pending_is_pending() {
        assert_eq!(aggregate(&[Pending, Pending]), OverallStatus::Pending);
    }

    #[test]
    fn test_all_done_is_done() {
        assert_eq!(aggregate(&[Done, Done]), OverallStatus::Done);
    }

    #[test]
    fn test_mixture_is_running() {
        assert_eq!(aggregate(&[Pending, Done]), OverallStatus::Running);
        assert_eq!(aggregate(&[Done, Pending]), OverallStatus::Running);
        assert_eq!(aggregate(&[Pending, Running, Done]), OverallStatus::Running);
    }

    #[test]
    fn test_any_running_is_running() {
        assert_eq!(aggregate(&[Running]), OverallStatus::Running);
        assert_eq!(aggregate(&[Running, Running]), OverallStatus::Running);
        assert_eq!(aggregate(&[Done, Running]), OverallStatus::Running);
    }

    #[test]
    fn test_empty_is_vacuously_pending() {
        assert_eq!(aggregate(&[]), OverallStatus::Pending);
    }

    #[test]
    fn test_overall_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OverallStatus::Running).unwrap(),
            r#""running""#
        );
    }
}

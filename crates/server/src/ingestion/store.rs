//! In-memory source of truth for submissions and their batches.
//!
//! The store is the single point of mutation for batch status; the
//! dispatch queue only ever holds references into it. Uses `IndexMap`
//! so listings come back in creation order with O(1) lookups by id.

use std::sync::RwLock;

use indexmap::IndexMap;
use uuid::Uuid;

use siphon_core::submission::{BatchStatus, Priority, Submission};
use siphon_core::SiphonError;
use siphon_dispatch::{DispatchQueue, JobRef};

#[derive(Debug, Default)]
pub struct IngestionStore {
    submissions: RwLock<IndexMap<Uuid, Submission>>,
}

impl IngestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically register a submission with all batches `pending` and
    /// enqueue one job reference per batch, in split order, at the given
    /// priority. Returns the fresh submission id.
    pub fn create(
        &self,
        priority: Priority,
        id_batches: Vec<Vec<i64>>,
        queue: &mut DispatchQueue,
    ) -> Uuid {
        let submission = Submission::new(priority, id_batches);
        let submission_id = submission.id;
        let jobs: Vec<JobRef> = submission
            .batches
            .keys()
            .map(|&batch_id| JobRef {
                submission_id,
                batch_id,
            })
            .collect();

        {
            let mut submissions = self.submissions.write().unwrap();
            submissions.insert(submission_id, submission);
        }
        for job in jobs {
            queue.enqueue(priority, job);
        }
        submission_id
    }

    /// Cloned snapshot of one submission.
    pub fn get(&self, submission_id: &Uuid) -> Option<Submission> {
        self.submissions.read().unwrap().get(submission_id).cloned()
    }

    /// Cloned snapshots of all submissions, in creation order.
    pub fn list(&self) -> Vec<Submission> {
        self.submissions.read().unwrap().values().cloned().collect()
    }

    /// Scheduler-internal status transition.
    ///
    /// Unknown ids or a non-monotonic transition mean the store and the
    /// dispatch queue have diverged; reported as an error, never
    /// applied silently.
    pub fn set_batch_status(
        &self,
        submission_id: Uuid,
        batch_id: Uuid,
        status: BatchStatus,
    ) -> Result<(), SiphonError> {
        let mut submissions = self.submissions.write().unwrap();
        let submission = submissions
            .get_mut(&submission_id)
            .ok_or(SiphonError::SubmissionNotFound(submission_id))?;
        let batch = submission
            .batches
            .get_mut(&batch_id)
            .ok_or(SiphonError::UnknownBatch {
                submission_id,
                batch_id,
            })?;

        if !batch.status.can_transition_to(status) {
            return Err(SiphonError::InvalidTransition {
                from: batch.status,
                to: status,
            });
        }
        batch.status = status;
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn create_submission(
        store: &IngestionStore,
        queue: &mut DispatchQueue,
        priority: Priority,
    ) -> Uuid {
        store.create(priority, vec![vec![1, 2, 3], vec![4, 5]], queue)
    }

    #[test]
    fn test_create_registers_pending_batches() {
        let store = IngestionStore::new();
        let mut queue = DispatchQueue::new();

        let id = create_submission(&store, &mut queue, Priority::High);
        let submission = store.get(&id).unwrap();

        assert_eq!(submission.priority, Priority::High);
        assert_eq!(submission.batches.len(), 2);
        let batches: Vec<_> = submission.batches.values().collect();
        assert_eq!(batches[0].ids, vec![1, 2, 3]);
        assert_eq!(batches[1].ids, vec![4, 5]);
        assert!(batches.iter().all(|b| b.status == BatchStatus::Pending));
    }

    #[test]
    fn test_create_enqueues_jobs_in_split_order() {
        let store = IngestionStore::new();
        let mut queue = DispatchQueue::new();

        let id = create_submission(&store, &mut queue, Priority::Medium);
        let submission = store.get(&id).unwrap();
        let batch_ids: Vec<Uuid> = submission.batches.keys().copied().collect();

        assert_eq!(queue.depth(Priority::Medium), 2);
        let first = queue.dequeue_next().unwrap();
        let second = queue.dequeue_next().unwrap();
        assert_eq!(first.submission_id, id);
        assert_eq!(first.batch_id, batch_ids[0]);
        assert_eq!(second.batch_id, batch_ids[1]);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = IngestionStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_list_preserves_creation_order() {
        let store = IngestionStore::new();
        let mut queue = DispatchQueue::new();

        let first = create_submission(&store, &mut queue, Priority::Low);
        let second = create_submission(&store, &mut queue, Priority::High);

        let listed: Vec<Uuid> = store.list().iter().map(|s| s.id).collect();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn test_set_batch_status_transitions() {
        let store = IngestionStore::new();
        let mut queue = DispatchQueue::new();

        let id = create_submission(&store, &mut queue, Priority::High);
        let batch_id = *store.get(&id).unwrap().batches.keys().next().unwrap();

        store
            .set_batch_status(id, batch_id, BatchStatus::Running)
            .unwrap();
        assert_eq!(
            store.get(&id).unwrap().batches[&batch_id].status,
            BatchStatus::Running
        );

        store.set_batch_status(id, batch_id, BatchStatus::Done).unwrap();
        assert_eq!(
            store.get(&id).unwrap().batches[&batch_id].status,
            BatchStatus::Done
        );
    }

    #[test]
    fn test_set_batch_status_rejects_regression() {
        let store = IngestionStore::new();
        let mut queue = DispatchQueue::new();

        let id = create_submission(&store, &mut queue, Priority::High);
        let batch_id = *store.get(&id).unwrap().batches.keys().next().unwrap();

        // pending -> done skips a state
        let err = store
            .set_batch_status(id, batch_id, BatchStatus::Done)
            .unwrap_err();
        assert!(matches!(err, SiphonError::InvalidTransition { .. }));
        assert!(err.is_consistency_violation());

        // status untouched after the rejected transition
        assert_eq!(
            store.get(&id).unwrap().batches[&batch_id].status,
            BatchStatus::Pending
        );
    }

    #[test]
    fn test_set_batch_status_unknown_ids() {
        let store = IngestionStore::new();
        let mut queue = DispatchQueue::new();
        let id = create_submission(&store, &mut queue, Priority::High);

        let err = store
            .set_batch_status(Uuid::new_v4(), Uuid::new_v4(), BatchStatus::Running)
            .unwrap_err();
        assert!(matches!(err, SiphonError::SubmissionNotFound(_)));

        let err = store
            .set_batch_status(id, Uuid::new_v4(), BatchStatus::Running)
            .unwrap_err();
        assert!(matches!(err, SiphonError::UnknownBatch { .. }));
        assert!(err.is_consistency_violation());
    }
}

//! Tick-driven batch dispatcher.
//!
//! Every `tick_interval` the scheduler admits at most one batch from the
//! dispatch queue: the batch moves to `running` and a one-shot timer
//! marks it `done` after `processing_duration`. One admission per tick
//! is a rate limit, not a concurrency limit: when processing outlasts
//! the tick interval, several batches are legitimately `running` at
//! once. Ticks and completions are independent timed events; a tick
//! never waits for a completion, and a running batch is never aborted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, trace};

use siphon_core::config::IngestionConfig;
use siphon_core::submission::BatchStatus;
use siphon_dispatch::JobRef;

use crate::ingestion::store::IngestionStore;
use crate::state::SharedQueue;

pub struct DispatchScheduler {
    store: Arc<IngestionStore>,
    queue: SharedQueue,
    tick_interval: Duration,
    processing_duration: Duration,
    shutdown: AtomicBool,
}

impl DispatchScheduler {
    pub fn new(config: &IngestionConfig, store: Arc<IngestionStore>, queue: SharedQueue) -> Self {
        Self {
            store,
            queue,
            tick_interval: config.tick_interval(),
            processing_duration: config.processing_duration(),
            shutdown: AtomicBool::new(false),
        }
    }

    /// Spawn the tick loop on the runtime. The first dispatch happens
    /// one full interval after start.
    pub fn start(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let scheduler = Arc::clone(self);
        info!(
            tick_interval_ms = self.tick_interval.as_millis() as u64,
            processing_duration_ms = self.processing_duration.as_millis() as u64,
            "dispatch scheduler started"
        );
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(scheduler.tick_interval);
            interval.tick().await; // consume the immediate first fire
            loop {
                interval.tick().await;
                if scheduler.shutdown.load(Ordering::Relaxed) {
                    break;
                }
                scheduler.tick();
            }
            info!("dispatch scheduler stopped");
        })
    }

    /// Signal the tick loop to stop. In-flight completion timers still
    /// fire; there is no cancellation path for a running batch.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Run one dispatch step: admit at most one pending batch to
    /// `running`. Returns the dispatched job, if any.
    ///
    /// A store/queue divergence aborts this tick's dispatch only; the
    /// loop keeps ticking.
    pub fn tick(&self) -> Option<JobRef> {
        let job = self.queue.lock().unwrap().dequeue_next();
        let Some(job) = job else {
            trace!("tick: no pending batches");
            return None;
        };

        if let Err(e) = self
            .store
            .set_batch_status(job.submission_id, job.batch_id, BatchStatus::Running)
        {
            error!(
                submission_id = %job.submission_id,
                batch_id = %job.batch_id,
                error = %e,
                "dispatch aborted: store out of sync with queue"
            );
            return None;
        }

        info!(
            submission_id = %job.submission_id,
            batch_id = %job.batch_id,
            "batch dispatched"
        );
        self.spawn_completion(job);
        Some(job)
    }

    /// One-shot completion timer for a dispatched batch.
    fn spawn_completion(&self, job: JobRef) {
        let store = Arc::clone(&self.store);
        let processing_duration = self.processing_duration;
        tokio::spawn(async move {
            tokio::time::sleep(processing_duration).await;
            match store.set_batch_status(job.submission_id, job.batch_id, BatchStatus::Done) {
                Ok(()) => info!(
                    submission_id = %job.submission_id,
                    batch_id = %job.batch_id,
                    "batch completed"
                ),
                Err(e) => error!(
                    submission_id = %job.submission_id,
                    batch_id = %job.batch_id,
                    error = %e,
                    "completion aborted: store out of sync with queue"
                ),
            }
        });
    }
}

// ── Tests ────────────────────────────────────────────────────────────

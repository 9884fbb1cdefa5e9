//! Shared state initialization.
//!
//! The store/queue pair is constructed exactly once here and handed to
//! the scheduler and the HTTP handlers by reference. No process-wide
//! singletons.

use std::sync::{Arc, Mutex};

use siphon_core::Config;
use siphon_dispatch::DispatchQueue;

use crate::ingestion::scheduler::DispatchScheduler;
use crate::ingestion::store::IngestionStore;
use crate::state::{AppState, SharedQueue};

/// Build `AppState` and the (not yet started) dispatch scheduler.
pub fn build_app_state(config: &Config) -> (Arc<AppState>, Arc<DispatchScheduler>) {
    let store = Arc::new(IngestionStore::new());
    let queue: SharedQueue = Arc::new(Mutex::new(DispatchQueue::new()));

    let scheduler = Arc::new(DispatchScheduler::new(
        &config.ingestion,
        Arc::clone(&store),
        Arc::clone(&queue),
    ));

    let state = Arc::new(AppState {
        store,
        queue,
        config: config.clone(),
    });

    (state, scheduler)
}

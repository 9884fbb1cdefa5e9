use std::sync::{Arc, Mutex};

use siphon_core::Config;
use siphon_dispatch::DispatchQueue;

use crate::ingestion::store::IngestionStore;

/// The dispatch queue behind its single mutex. All mutations of queue
/// and store are short critical sections; no lock is held across await.
pub type SharedQueue = Arc<Mutex<DispatchQueue>>;

pub struct AppState {
    pub store: Arc<IngestionStore>,
    pub queue: SharedQueue,
    pub config: Config,
}

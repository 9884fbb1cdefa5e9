pub mod lane;
pub mod splitter;

pub use lane::{DispatchQueue, JobRef};
pub use splitter::{split, DEFAULT_BATCH_SIZE};

pub mod config;
pub mod error;
pub mod status;
pub mod submission;

pub use config::Config;
pub use error::SiphonError;
pub use status::{aggregate, OverallStatus};
pub use submission::{Batch, BatchStatus, Priority, Submission};

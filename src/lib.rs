pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;

pub use error::{CleanerError, Result};
pub use pipeline::{clean, CleanOutcome};
pub use report::CleaningReport;

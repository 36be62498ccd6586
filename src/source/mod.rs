use crate::job::Job;
use anyhow::Result;

/// Where a job snapshot comes from: a live atom endpoint, or a local
/// snapshot file for offline work.
pub trait JobSource: Send + Sync {
    /// Fetch one immutable snapshot of the scheduled jobs.
    fn fetch(&self) -> Result<Vec<Job>>;

    /// Human-readable label for the title bar.
    fn name(&self) -> String;
}

pub mod file;
pub mod http;

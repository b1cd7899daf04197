//! Worker job definitions for background processing.
//!
//! Each variant carries the minimal data the handler needs; the editais table
//! itself is the queue, so a job is just a claimed record's identity.

use std::fmt;

/// Background job types dispatched to the worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerJob {
    /// Run the analysis pipeline for a claimed edital.
    ///
    /// The dispatcher claims the edital (PENDING → PROCESSING) before the job
    /// is spawned; the handler runs extraction and commits or fails the
    /// attempt.
    AnalyzeEdital {
        /// Database ID of the claimed edital.
        edital_id: i32,
    },
}

impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

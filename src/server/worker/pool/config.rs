use std::time::Duration;

/// Configuration for the worker pool
#[derive(Debug, Clone)]
pub struct WorkerPoolConfig {
    /// Maximum concurrent jobs that can be processed simultaneously.
    ///
    /// Set this to ~80% of your PostgreSQL connection pool size to avoid
    /// connection exhaustion. For example, if your DB pool has 100 connections,
    /// set this to 80.
    pub max_concurrent_jobs: usize,

    /// Number of dispatcher tasks that poll the database for pending editais.
    ///
    /// Automatically calculated as 1 dispatcher per 40 concurrent jobs (minimum 1).
    /// This ensures adequate polling capacity as concurrency scales.
    pub dispatcher_count: usize,

    /// How long to wait between polls when no edital is pending (milliseconds).
    pub poll_interval_ms: u64,

    /// Maximum time a job can run before being cancelled (seconds).
    ///
    /// A coarse backstop above the extraction client's own request timeout;
    /// a job cancelled here is recovered by the stuck-analysis sweep.
    pub job_timeout_seconds: u64,

    /// Maximum time to wait for a dispatcher to shutdown (seconds).
    /// If a dispatcher doesn't stop within this time, a warning is logged.
    pub shutdown_timeout_seconds: u64,
}

impl WorkerPoolConfig {
    /// Create a new configuration with sensible defaults
    ///
    /// # Arguments
    /// * `max_concurrent_jobs` - Maximum concurrent jobs (~80% of DB pool size)
    pub fn new(max_concurrent_jobs: usize) -> Self {
        // Scale dispatchers: 1 per 40 concurrent jobs, minimum 1
        // Use ceiling division to ensure no more than 40 jobs per dispatcher
        let dispatcher_count = ((max_concurrent_jobs + 39) / 40).max(1);

        Self {
            max_concurrent_jobs,
            dispatcher_count,
            poll_interval_ms: 50,         // 50ms between polls when nothing is pending
            job_timeout_seconds: 300,     // 5 minutes
            shutdown_timeout_seconds: 5,  // 5 seconds to wait for dispatcher shutdown
        }
    }

    /// Get job timeout as Duration
    pub fn job_timeout(&self) -> Duration {
        Duration::from_secs(self.job_timeout_seconds)
    }

    /// Get poll interval as Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Get shutdown timeout as Duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

mod job_processing;
mod lifecycle;

use std::time::Duration;

use habilita::server::{
    extractor::ExtractorClient,
    worker::{WorkerJobHandler, WorkerPool, WorkerPoolConfig},
};
use habilita_test_utils::prelude::*;

/// Create a test-optimized config with fast timeouts
/// Uses 4 max_concurrent_jobs by default for tests (1 dispatcher)
pub fn test_config() -> WorkerPoolConfig {
    let mut config = WorkerPoolConfig::new(4);
    config.poll_interval_ms = 10;
    config.job_timeout_seconds = 5;
    config.shutdown_timeout_seconds = 1;
    config
}

/// Create a test worker pool wired to the setup's database and mock extractor
pub fn create_test_pool(test: &TestSetup) -> WorkerPool {
    let extractor = ExtractorClient::new(test.server.url(), Duration::from_secs(2));
    let handler = WorkerJobHandler::new(test.db.clone(), extractor);

    WorkerPool::new(test_config(), test.db.clone(), handler)
}

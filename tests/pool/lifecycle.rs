//! Tests for WorkerPool lifecycle management.
//!
//! Verifies starting and stopping the pool, running-state tracking,
//! dispatcher counts, and idempotent start/stop operations.

use habilita_test_utils::prelude::*;

use super::create_test_pool;

/// Expect the pool to start and report itself running
#[tokio::test]
async fn starts_successfully() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let pool = create_test_pool(&test);

    assert!(!pool.is_running().await);
    assert_eq!(pool.dispatcher_count().await, 0);

    pool.start().await.expect("pool should start");

    assert!(pool.is_running().await);
    assert_eq!(pool.dispatcher_count().await, 1);

    pool.stop().await.expect("pool should stop");

    Ok(())
}

/// Expect the pool to stop cleanly and report itself stopped
#[tokio::test]
async fn stops_successfully() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let pool = create_test_pool(&test);

    pool.start().await.expect("pool should start");
    pool.stop().await.expect("pool should stop");

    assert!(!pool.is_running().await);
    assert_eq!(pool.dispatcher_count().await, 0);

    Ok(())
}

/// Expect repeated start and stop calls to be harmless
#[tokio::test]
async fn start_and_stop_are_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let pool = create_test_pool(&test);

    pool.start().await.expect("pool should start");
    pool.start().await.expect("second start should be a no-op");
    assert_eq!(pool.dispatcher_count().await, 1);

    pool.stop().await.expect("pool should stop");
    pool.stop().await.expect("second stop should be a no-op");
    assert!(!pool.is_running().await);

    Ok(())
}

/// Expect permit accounting to reflect the configured concurrency
#[tokio::test]
async fn reports_permit_capacity() -> Result<(), TestError> {
    let test = test_setup_with_engine_tables!()?;
    let pool = create_test_pool(&test);

    assert_eq!(pool.max_concurrent_jobs(), 4);
    assert_eq!(pool.available_permits(), 4);
    assert_eq!(pool.active_job_count(), 0);

    Ok(())
}

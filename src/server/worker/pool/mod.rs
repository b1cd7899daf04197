//! Worker pool for processing edital analyses with concurrency control.
//!
//! This module provides the `WorkerPool` that manages dispatcher tasks, job execution,
//! and concurrency limits using semaphores. The pool polls the editais table for
//! PENDING rows, claims them with a compare-and-set transition, and spawns tasks to
//! process them with configurable timeout and shutdown behavior.

mod config;

pub use config::WorkerPoolConfig;

use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::sync::{Notify, RwLock, Semaphore};
use tokio::task::JoinHandle;

use crate::server::data::edital::EditalRepository;
use crate::server::model::worker::WorkerJob;
use crate::server::worker::handler::WorkerJobHandler;
use crate::server::error::Error;

/// Worker pool for processing pending editais.
///
/// Manages multiple dispatcher tasks that claim pending editais and spawn execution
/// tasks with semaphore-based concurrency control. Provides graceful shutdown and
/// monitoring.
#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<WorkerPoolRef>,
}

/// Internal worker pool reference with configuration and runtime state.
///
/// Contains the worker pool configuration, database handle, job handler, and runtime
/// state including semaphores for concurrency control, shutdown notifications, and
/// dispatcher task handles. This struct is wrapped in an Arc by `WorkerPool` for
/// cheap cloning.
pub struct WorkerPoolRef {
    config: WorkerPoolConfig,
    db: DatabaseConnection,
    handler: Arc<WorkerJobHandler>,
    semaphore: Arc<Semaphore>,
    shutdown: Arc<Notify>,
    dispatcher_handles: Arc<RwLock<Vec<JoinHandle<()>>>>,
}

impl WorkerPool {
    /// Creates a new worker pool.
    ///
    /// Initializes a worker pool with the specified configuration, database handle,
    /// and handler. The pool is created in a stopped state and must be started with
    /// `start()`.
    ///
    /// # Arguments
    /// - `config` - Configuration including max concurrent jobs and dispatcher settings
    /// - `db` - Database connection the dispatchers claim pending editais through
    /// - `handler` - Job handler for executing claimed jobs
    ///
    /// # Returns
    /// - `WorkerPool` - New worker pool ready to start
    pub fn new(config: WorkerPoolConfig, db: DatabaseConnection, handler: WorkerJobHandler) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));
        let shutdown = Arc::new(Notify::new());

        Self {
            inner: Arc::new(WorkerPoolRef {
                config,
                db,
                handler: Arc::new(handler),
                semaphore,
                shutdown,
                dispatcher_handles: Arc::new(RwLock::new(Vec::new())),
            }),
        }
    }

    /// Starts the worker pool.
    ///
    /// Spawns the configured number of dispatcher tasks that poll the editais table
    /// for pending work and spawn execution tasks. The semaphore controls maximum
    /// concurrency.
    ///
    /// This method is non-blocking and returns immediately after spawning dispatchers.
    /// It is idempotent - calling it when already running logs a warning and returns Ok.
    ///
    /// # Returns
    /// - `Ok(())` - Pool started successfully (or already running)
    /// - `Err(Error)` - Failed to start pool
    pub async fn start(&self) -> Result<(), Error> {
        let mut handles = self.inner.dispatcher_handles.write().await;

        if !handles.is_empty() {
            tracing::warn!("Worker pool is already running");
            return Ok(());
        }

        tracing::info!(
            "Starting worker pool with {} dispatcher(s) (max {} concurrent jobs)",
            self.inner.config.dispatcher_count,
            self.inner.config.max_concurrent_jobs
        );

        for id in 0..self.inner.config.dispatcher_count {
            let handle = self.spawn_dispatcher(id);
            handles.push(handle);
        }

        tracing::info!(
            "Worker pool started successfully ({} dispatcher(s) active)",
            self.inner.config.dispatcher_count
        );

        Ok(())
    }

    /// Spawns a single dispatcher task.
    ///
    /// Creates a tokio task that continuously claims pending editais and spawns
    /// execution tasks. The dispatcher respects shutdown signals and exits cleanly.
    ///
    /// # Arguments
    /// - `id` - Dispatcher identifier for logging
    ///
    /// # Returns
    /// - `JoinHandle<()>` - Handle to the spawned dispatcher task
    fn spawn_dispatcher(&self, id: usize) -> JoinHandle<()> {
        let config = self.inner.config.clone();
        let db = self.inner.db.clone();
        let handler = Arc::clone(&self.inner.handler);
        let semaphore = Arc::clone(&self.inner.semaphore);
        let shutdown = Arc::clone(&self.inner.shutdown);

        tokio::spawn(async move {
            tracing::info!("Dispatcher {} started", id);

            loop {
                tokio::select! {
                    // Biased select ensures shutdown signal is prioritized
                    // over claiming new work, enabling faster shutdown.
                    biased;

                    _ = shutdown.notified() => {
                        tracing::debug!("Dispatcher {} received shutdown signal", id);
                        break;
                    }

                    _ = Self::process_jobs(
                        id,
                        &config,
                        &db,
                        &handler,
                        &semaphore,
                    ) => {
                        // Continue to next iteration
                    }
                }
            }

            tracing::info!("Dispatcher {} stopped", id);
        })
    }

    /// Claims pending work from the editais table.
    ///
    /// Claims the oldest pending edital and spawns a task to process it. Blocks on
    /// semaphore if at capacity. Sleeps if nothing is pending or on error. Releases
    /// the claim back to PENDING if the semaphore is closed (shutting down).
    ///
    /// # Arguments
    /// - `dispatcher_id` - Dispatcher identifier for logging
    /// - `config` - Pool configuration for timing values
    /// - `db` - Database connection to claim through
    /// - `handler` - Job handler for execution
    /// - `semaphore` - Concurrency limit semaphore
    async fn process_jobs(
        dispatcher_id: usize,
        config: &WorkerPoolConfig,
        db: &DatabaseConnection,
        handler: &Arc<WorkerJobHandler>,
        semaphore: &Arc<Semaphore>,
    ) {
        match EditalRepository::new(db).claim_next_pending().await {
            Ok(Some(edital)) => {
                // Try to acquire a permit (blocks if at capacity)
                match semaphore.clone().acquire_owned().await {
                    Ok(permit) => {
                        let handler = Arc::clone(handler);
                        let timeout = config.job_timeout();
                        let job = WorkerJob::AnalyzeEdital {
                            edital_id: edital.id,
                        };

                        tokio::spawn(async move {
                            Self::execute_job(job, handler, timeout, permit).await;
                        });
                    }
                    Err(_) => {
                        // Semaphore closed (shutting down), return the claim
                        let _ = EditalRepository::new(db).release_claim(edital.id).await;
                        tracing::debug!(
                            "Dispatcher {} semaphore closed, released claim on edital {}",
                            dispatcher_id,
                            edital.id
                        );
                    }
                }
            }
            Ok(None) => {
                // Nothing pending, sleep before next poll
                tokio::time::sleep(config.poll_interval()).await;
            }
            Err(e) => {
                // Error claiming work, log and backoff
                tracing::error!("Dispatcher {} claim error: {:?}", dispatcher_id, e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }

    /// Executes a job with timeout.
    ///
    /// Wraps job execution with timeout to prevent hung jobs. The semaphore permit is
    /// held until completion, limiting concurrency. Logs success, failure, or timeout.
    /// A timed-out job leaves its edital PROCESSING; the recovery sweep fails it.
    ///
    /// # Arguments
    /// - `job` - Worker job to execute
    /// - `handler` - Job handler for execution
    /// - `timeout` - Maximum execution time
    /// - `_permit` - Semaphore permit (held until dropped)
    async fn execute_job(
        job: WorkerJob,
        handler: Arc<WorkerJobHandler>,
        timeout: Duration,
        _permit: tokio::sync::OwnedSemaphorePermit,
    ) {
        let result = tokio::time::timeout(timeout, handler.handle(&job)).await;

        match result {
            Ok(Ok(())) => {
                tracing::debug!("Job completed: {}", job);
            }
            Ok(Err(e)) => {
                tracing::error!("Job failed: {}, error: {:?}", job, e);
            }
            Err(_) => {
                tracing::error!("Job timed out after {} seconds: {}", timeout.as_secs(), job);
            }
        }

        // Permit automatically dropped here, releasing semaphore slot
    }

    /// Stops the worker pool gracefully.
    ///
    /// Signals all dispatchers to stop and closes the semaphore to prevent new jobs.
    /// Waits for all dispatchers to shut down with a configured timeout. In-flight
    /// job-processing tasks continue to completion.
    ///
    /// This method is idempotent - calling it when already stopped returns immediately.
    /// It blocks until all dispatchers have shut down or timeout is reached.
    ///
    /// # Returns
    /// - `Ok(())` - Pool stopped successfully (or already stopped)
    /// - `Err(Error)` - Failed to stop pool
    ///
    /// # Note
    /// Call this method before dropping the WorkerPool to ensure clean shutdown.
    /// Dropping without calling stop() may leave orphaned tasks.
    pub async fn stop(&self) -> Result<(), Error> {
        // Check if already stopped (idempotent)
        if !self.is_running().await {
            tracing::debug!("Worker pool is already stopped");
            return Ok(());
        }

        tracing::info!("Shutting down worker pool...");

        // Close semaphore to prevent new jobs from starting
        self.inner.semaphore.close();

        // Signal all dispatchers to stop
        self.inner.shutdown.notify_waiters();

        // Wait for all dispatchers to finish (with timeout)
        let mut handles = self.inner.dispatcher_handles.write().await;
        let dispatcher_count = handles.len();

        for (i, handle) in handles.drain(..).enumerate() {
            let timeout_result =
                tokio::time::timeout(self.inner.config.shutdown_timeout(), handle).await;

            match timeout_result {
                Ok(Ok(())) => {
                    tracing::debug!("Dispatcher {} stopped cleanly", i);
                }
                Ok(Err(e)) => {
                    tracing::error!("Dispatcher {} panicked: {:?}", i, e);
                }
                Err(_) => {
                    tracing::warn!("Dispatcher {} did not stop within timeout", i);
                }
            }
        }

        tracing::info!(
            "Worker pool shut down ({} dispatchers stopped, in-flight tasks will complete)",
            dispatcher_count
        );

        Ok(())
    }

    /// Checks if the worker pool is running.
    ///
    /// # Returns
    /// - `true` - Pool has active dispatchers
    /// - `false` - Pool is stopped
    pub async fn is_running(&self) -> bool {
        let handles = self.inner.dispatcher_handles.read().await;
        !handles.is_empty()
    }

    /// Gets the number of active dispatchers.
    ///
    /// # Returns
    /// - `usize` - Number of dispatcher tasks currently running
    pub async fn dispatcher_count(&self) -> usize {
        let handles = self.inner.dispatcher_handles.read().await;
        handles.len()
    }

    /// Gets the number of available semaphore permits.
    ///
    /// This indicates how many more jobs can be spawned before hitting the
    /// concurrency limit. A value of 0 means the system is at capacity.
    ///
    /// # Returns
    /// - `usize` - Number of available permits (max jobs that can start now)
    pub fn available_permits(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    /// Gets the maximum number of concurrent jobs configured.
    ///
    /// # Returns
    /// - `usize` - Maximum concurrent jobs from configuration
    pub fn max_concurrent_jobs(&self) -> usize {
        self.inner.config.max_concurrent_jobs
    }

    /// Gets the current number of jobs being processed.
    ///
    /// This is calculated as: max_concurrent_jobs - available_permits
    ///
    /// # Returns
    /// - `usize` - Number of jobs currently executing
    pub fn active_job_count(&self) -> usize {
        self.inner.config.max_concurrent_jobs - self.inner.semaphore.available_permits()
    }
}

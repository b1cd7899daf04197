//! Scheduler for periodic engine maintenance tasks.
//!
//! This module provides a cron-based job scheduler that keeps derived state
//! honest without user activity: nightly validity recomputation, the morning
//! expiry alert sweep, and the stuck-analysis recovery sweep all run here on
//! configured cron expressions.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, notifier::NotifierClient};

pub mod alert;
pub mod config;
pub mod recovery;
pub mod validity;

/// Job scheduler for the engine's periodic maintenance tasks.
///
/// Manages the cron jobs that recompute document validity, sweep and dispatch
/// expiry alerts, and force-fail stuck analyses, each on its configured
/// schedule.
pub struct Scheduler {
    db: DatabaseConnection,
    notifier: NotifierClient,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// Initializes the underlying `JobScheduler` and prepares the scheduler
    /// with the provided database connection and notification client.
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection, notifier: NotifierClient) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            notifier,
            sched,
        })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Nightly document validity recomputation
    /// - Morning expiry alert sweep and dispatch
    /// - Stuck analysis recovery
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            config::validity::CRON_EXPRESSION,
            "document validity",
            validity::recompute_validity,
        )
        .await?;

        self.schedule_job(
            config::alert::CRON_EXPRESSION,
            "expiry alert",
            alert::sweep_alerts,
        )
        .await?;

        self.schedule_job(
            config::recovery::CRON_EXPRESSION,
            "stuck analysis recovery",
            recovery::recover_stuck_analyses,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// Registers a new asynchronous job that executes the provided function
    /// according to the cron expression. The function receives clones of the
    /// database connection and notification client and reports how many
    /// records it touched.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async maintenance function returning the count of affected records
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, NotifierClient) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let notifier = self.notifier.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let notifier = notifier.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, notifier).await {
                        Ok(count) => tracing::debug!("{} job touched {} record(s)", name, count),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

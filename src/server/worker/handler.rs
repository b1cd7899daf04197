use sea_orm::DatabaseConnection;

use entity::edital::AnalysisStatus;

use crate::server::{
    data::edital::EditalRepository, error::Error, extractor::ExtractorClient,
    model::worker::WorkerJob, service::analysis::AnalysisService,
};

/// Handler for processing worker jobs claimed by the pool
///
/// This handler provides a centralized interface for executing different types
/// of worker jobs. Each job type has a corresponding method that handles the
/// specific business logic.
pub struct WorkerJobHandler {
    db: DatabaseConnection,
    extractor: ExtractorClient,
}

impl WorkerJobHandler {
    /// Create a new WorkerJobHandler
    pub fn new(db: DatabaseConnection, extractor: ExtractorClient) -> Self {
        Self { db, extractor }
    }

    /// Handle a worker job by delegating to the appropriate handler method
    ///
    /// This is the main entry point for job processing. It dispatches the job
    /// to the correct handler method based on the job type.
    pub async fn handle(&self, job: &WorkerJob) -> Result<(), Error> {
        match job {
            WorkerJob::AnalyzeEdital { edital_id } => self.analyze_edital(*edital_id).await,
        }
    }

    /// Run a claimed edital through the analysis state machine.
    ///
    /// The dispatcher claimed the edital before spawning this job; if the
    /// claim was lost in the meantime (recovery sweep, retry reset) the row
    /// is no longer PROCESSING and the job no-ops.
    pub async fn analyze_edital(&self, edital_id: i32) -> Result<(), Error> {
        tracing::debug!("Processing analysis job for edital {}", edital_id);

        let Some(edital) = EditalRepository::new(&self.db).find_by_id(edital_id).await? else {
            tracing::warn!("Claimed edital {} no longer exists", edital_id);
            return Ok(());
        };

        if edital.analysis_status != AnalysisStatus::Processing {
            tracing::debug!(
                "Edital {} lost its claim ({:?}), skipping",
                edital_id,
                edital.analysis_status
            );
            return Ok(());
        }

        AnalysisService::new(&self.db, &self.extractor)
            .run_claimed(&edital)
            .await
            .map_err(|e| {
                tracing::error!("Analysis failed for edital {}: {:?}", edital_id, e);
                e
            })?;

        tracing::debug!("Successfully analyzed edital {}", edital_id);

        Ok(())
    }
}

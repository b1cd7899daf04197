//! Edital analysis state machine.
//!
//! Drives an uploaded edital through PENDING → PROCESSING → COMPLETED/FAILED.
//! Claims and terminal flips are compare-and-set guarded at the repository so
//! competing workers and the recovery sweep resolve races by no-oping, never
//! by double-processing. Results of an attempt are persisted atomically with
//! the COMPLETED flip; a failed attempt leaves no partial rows.

#[cfg(test)]
mod tests;

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::edital::AnalysisStatus;

use crate::server::{
    data::{analysis::AnalysisRepository, edital::EditalRepository},
    error::{analysis::AnalysisError, Error},
    extractor::ExtractorClient,
    model::{analysis::AnalysisResults, extractor::ExtractionResult},
};

pub struct AnalysisService<'a> {
    db: &'a DatabaseConnection,
    extractor: &'a ExtractorClient,
}

impl<'a> AnalysisService<'a> {
    /// Creates a new instance of [`AnalysisService`]
    pub fn new(db: &'a DatabaseConnection, extractor: &'a ExtractorClient) -> Self {
        Self { db, extractor }
    }

    /// Register an uploaded edital for analysis.
    ///
    /// The edital enters the queue as PENDING; a pool dispatcher picks it up.
    pub async fn submit(
        &self,
        company_id: i32,
        original_filename: &str,
        file_path: &str,
        file_size: i64,
    ) -> Result<entity::edital::Model, Error> {
        let edital = EditalRepository::new(self.db)
            .create(company_id, original_filename, file_path, file_size)
            .await?;

        tracing::info!(
            "Edital {} ({}) submitted for analysis",
            edital.id,
            edital.original_filename
        );

        Ok(edital)
    }

    /// Claim a specific edital and run it through analysis.
    ///
    /// No-ops when the edital is not PENDING: either another worker holds the
    /// claim or the edital already reached a terminal state.
    pub async fn process_edital(&self, edital_id: i32) -> Result<(), Error> {
        let edital_repo = EditalRepository::new(self.db);

        let edital = edital_repo
            .find_by_id(edital_id)
            .await?
            .ok_or(AnalysisError::EditalNotFound(edital_id))?;

        if !edital_repo.claim_pending(edital_id).await? {
            tracing::debug!(
                "Edital {} is not pending ({:?}), skipping",
                edital_id,
                edital.analysis_status
            );
            return Ok(());
        }

        self.run_extraction(&edital).await
    }

    /// Run analysis for an edital already claimed by the caller.
    ///
    /// Pool dispatchers claim through the repository, then hand the claimed
    /// row here.
    pub async fn run_claimed(&self, edital: &entity::edital::Model) -> Result<(), Error> {
        self.run_extraction(edital).await
    }

    /// Reset a FAILED edital back to PENDING for a fresh attempt.
    ///
    /// Purges any result rows of the previous attempt in the same transaction
    /// as the status reset, so old and new attempts never coexist.
    pub async fn retry(&self, edital_id: i32) -> Result<(), Error> {
        let edital = EditalRepository::new(self.db)
            .find_by_id(edital_id)
            .await?
            .ok_or(AnalysisError::EditalNotFound(edital_id))?;

        if edital.analysis_status != AnalysisStatus::Failed {
            return Err(AnalysisError::NotRetryable(edital_id).into());
        }

        let txn = self.db.begin().await?;

        AnalysisRepository::new(&txn).delete_results(edital_id).await?;
        if !EditalRepository::new(&txn).reset_to_pending(edital_id).await? {
            // Lost a race with another reset or a concurrent claim.
            txn.rollback().await?;
            return Err(AnalysisError::NotRetryable(edital_id).into());
        }

        txn.commit().await?;

        tracing::info!("Edital {} reset to pending for retry", edital_id);

        Ok(())
    }

    /// Delete an edital together with its analysis results.
    ///
    /// Removes the analysis, entity, and requirement rows in the same
    /// transaction as the edital itself.
    pub async fn delete_edital(&self, edital_id: i32) -> Result<(), Error> {
        EditalRepository::new(self.db)
            .find_by_id(edital_id)
            .await?
            .ok_or(AnalysisError::EditalNotFound(edital_id))?;

        let txn = self.db.begin().await?;

        AnalysisRepository::new(&txn).delete_results(edital_id).await?;
        EditalRepository::new(&txn).delete_by_id(edital_id).await?;

        txn.commit().await?;

        tracing::info!("Edital {} deleted", edital_id);

        Ok(())
    }

    /// Force-fail editais stuck in PROCESSING past the given age.
    ///
    /// The liveness backstop for crashed workers. Each flip is
    /// compare-and-set guarded, so a worker completing at the same moment
    /// wins and the sweep no-ops on that edital. Returns the number failed.
    pub async fn recover_stuck(
        db: &DatabaseConnection,
        older_than: Duration,
    ) -> Result<usize, Error> {
        let edital_repo = EditalRepository::new(db);
        let cutoff = Utc::now().naive_utc() - older_than;

        let stuck = edital_repo.find_stuck(cutoff).await?;

        let mut failed = 0;
        for edital in stuck {
            let message = format!(
                "Analysis exceeded {} minutes and was marked failed by the recovery sweep",
                older_than.num_minutes()
            );
            if edital_repo.mark_failed(edital.id, &message).await? {
                tracing::warn!("Recovered stuck edital {} as failed", edital.id);
                failed += 1;
            }
        }

        Ok(failed)
    }

    /// Everything persisted for a COMPLETED edital.
    pub async fn get_results(&self, edital_id: i32) -> Result<AnalysisResults, Error> {
        let edital = EditalRepository::new(self.db)
            .find_by_id(edital_id)
            .await?
            .ok_or(AnalysisError::EditalNotFound(edital_id))?;

        if edital.analysis_status != AnalysisStatus::Completed {
            return Err(AnalysisError::NotCompleted(edital_id).into());
        }

        let analysis_repo = AnalysisRepository::new(self.db);
        let analysis = analysis_repo
            .find_analysis(edital_id)
            .await?
            .ok_or(AnalysisError::NotCompleted(edital_id))?;
        let entities = analysis_repo.find_entities(edital_id).await?;
        let requirements = analysis_repo.find_requirements(edital_id).await?;

        Ok(AnalysisResults {
            edital,
            analysis,
            entities,
            requirements,
        })
    }

    /// Extract, validate, and persist one claimed attempt.
    ///
    /// Any failure before persistence marks the edital FAILED with the error's
    /// message and propagates the error to the caller.
    async fn run_extraction(&self, edital: &entity::edital::Model) -> Result<(), Error> {
        tracing::info!(
            "Analyzing edital {} ({})",
            edital.id,
            edital.original_filename
        );

        let response = match self
            .extractor
            .analyze(&edital.file_path, &edital.original_filename)
            .await
        {
            Ok(response) => response,
            Err(error) => {
                self.fail_attempt(edital.id, &error.to_string()).await;
                return Err(error.into());
            }
        };

        let result = match ExtractionResult::try_from(response) {
            Ok(result) => result,
            Err(error) => {
                self.fail_attempt(edital.id, &error.to_string()).await;
                return Err(error.into());
            }
        };

        if let Err(error) = self.persist_results(edital.id, result).await {
            self.fail_attempt(edital.id, "Failed to persist analysis results")
                .await;
            return Err(error);
        }

        Ok(())
    }

    /// Persist the validated result and flip to COMPLETED in one transaction.
    ///
    /// The flip is compare-and-set guarded against PROCESSING: if the recovery
    /// sweep failed this attempt in the meantime, the whole transaction rolls
    /// back and no result rows of the lost attempt survive.
    async fn persist_results(&self, edital_id: i32, result: ExtractionResult) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let analysis_repo = AnalysisRepository::new(&txn);
        analysis_repo.delete_results(edital_id).await?;
        analysis_repo.insert_analysis(edital_id, result.summary).await?;
        let entities = analysis_repo
            .insert_entities(edital_id, result.entities)
            .await?;
        let requirements = analysis_repo
            .insert_requirements(edital_id, result.requirements)
            .await?;

        if !EditalRepository::new(&txn).mark_completed(edital_id).await? {
            txn.rollback().await?;
            tracing::warn!(
                "Edital {} left PROCESSING during analysis, discarding results",
                edital_id
            );
            return Ok(());
        }

        txn.commit().await?;

        tracing::info!(
            "Edital {} completed: {} entities, {} requirements",
            edital_id,
            entities,
            requirements
        );

        Ok(())
    }

    /// Best-effort FAILED mark; the recovery sweep backstops a miss here.
    async fn fail_attempt(&self, edital_id: i32, message: &str) {
        match EditalRepository::new(self.db).mark_failed(edital_id, message).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("Edital {} was not PROCESSING when marked failed", edital_id)
            }
            Err(error) => {
                tracing::error!("Failed to mark edital {} as failed: {}", edital_id, error)
            }
        }
    }
}

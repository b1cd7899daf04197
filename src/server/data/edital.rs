use chrono::{NaiveDateTime, Utc};
use migration::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use entity::edital::AnalysisStatus;

/// Repository for editais and their analysis-status transitions.
///
/// Every status transition is a conditional `UPDATE … WHERE analysis_status =
/// <expected>` checked via rows-affected, so competing workers and the
/// recovery sweep can race safely: exactly one actor observes `true`, the
/// rest no-op.
pub struct EditalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EditalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        company_id: i32,
        original_filename: &str,
        file_path: &str,
        file_size: i64,
    ) -> Result<entity::edital::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Edital::insert(entity::edital::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            original_filename: ActiveValue::Set(original_filename.to_string()),
            file_path: ActiveValue::Set(file_path.to_string()),
            file_size: ActiveValue::Set(file_size),
            analysis_status: ActiveValue::Set(AnalysisStatus::Pending),
            error_message: ActiveValue::Set(None),
            processing_started_at: ActiveValue::Set(None),
            analyzed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::edital::Model>, DbErr> {
        entity::prelude::Edital::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::edital::Model>, DbErr> {
        entity::prelude::Edital::find()
            .filter(entity::edital::Column::CompanyId.eq(company_id))
            .all(self.db)
            .await
    }

    /// Claim a PENDING edital for processing.
    ///
    /// Returns `true` when this caller won the claim; `false` when the edital
    /// is missing or another worker already holds it.
    pub async fn claim_pending(&self, edital_id: i32) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::Edital::update_many()
            .col_expr(
                entity::edital::Column::AnalysisStatus,
                Expr::value(AnalysisStatus::Processing),
            )
            .col_expr(
                entity::edital::Column::ProcessingStartedAt,
                Expr::value(Some(now)),
            )
            .col_expr(entity::edital::Column::UpdatedAt, Expr::value(now))
            .filter(entity::edital::Column::Id.eq(edital_id))
            .filter(entity::edital::Column::AnalysisStatus.eq(AnalysisStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Claim the oldest PENDING edital, if any.
    ///
    /// Used by pool dispatchers, which have no specific edital in mind. A
    /// lost race against another dispatcher returns `Ok(None)`; the caller
    /// simply polls again.
    pub async fn claim_next_pending(&self) -> Result<Option<entity::edital::Model>, DbErr> {
        let candidate = entity::prelude::Edital::find()
            .filter(entity::edital::Column::AnalysisStatus.eq(AnalysisStatus::Pending))
            .order_by_asc(entity::edital::Column::CreatedAt)
            .order_by_asc(entity::edital::Column::Id)
            .limit(1)
            .one(self.db)
            .await?;

        let Some(candidate) = candidate else {
            return Ok(None);
        };

        if !self.claim_pending(candidate.id).await? {
            return Ok(None);
        }

        self.find_by_id(candidate.id).await
    }

    /// Return a claimed edital to PENDING without recording a failure.
    ///
    /// Used when the pool is shutting down before the claimed work started.
    pub async fn release_claim(&self, edital_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Edital::update_many()
            .col_expr(
                entity::edital::Column::AnalysisStatus,
                Expr::value(AnalysisStatus::Pending),
            )
            .col_expr(
                entity::edital::Column::ProcessingStartedAt,
                Expr::value(None::<NaiveDateTime>),
            )
            .col_expr(
                entity::edital::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::edital::Column::Id.eq(edital_id))
            .filter(entity::edital::Column::AnalysisStatus.eq(AnalysisStatus::Processing))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Flip a PROCESSING edital to COMPLETED.
    ///
    /// Run inside the same transaction as the result-row inserts so the flip
    /// and the rows commit or roll back together. `false` means the attempt
    /// lost the race (for example the recovery sweep failed it first).
    pub async fn mark_completed(&self, edital_id: i32) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::Edital::update_many()
            .col_expr(
                entity::edital::Column::AnalysisStatus,
                Expr::value(AnalysisStatus::Completed),
            )
            .col_expr(
                entity::edital::Column::ErrorMessage,
                Expr::value(None::<String>),
            )
            .col_expr(entity::edital::Column::AnalyzedAt, Expr::value(Some(now)))
            .col_expr(entity::edital::Column::UpdatedAt, Expr::value(now))
            .filter(entity::edital::Column::Id.eq(edital_id))
            .filter(entity::edital::Column::AnalysisStatus.eq(AnalysisStatus::Processing))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Flip a PROCESSING edital to FAILED with a human-readable reason.
    pub async fn mark_failed(&self, edital_id: i32, error_message: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Edital::update_many()
            .col_expr(
                entity::edital::Column::AnalysisStatus,
                Expr::value(AnalysisStatus::Failed),
            )
            .col_expr(
                entity::edital::Column::ErrorMessage,
                Expr::value(Some(error_message.to_string())),
            )
            .col_expr(
                entity::edital::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::edital::Column::Id.eq(edital_id))
            .filter(entity::edital::Column::AnalysisStatus.eq(AnalysisStatus::Processing))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Reset a FAILED edital to PENDING for a fresh attempt, clearing the
    /// previous error message.
    pub async fn reset_to_pending(&self, edital_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Edital::update_many()
            .col_expr(
                entity::edital::Column::AnalysisStatus,
                Expr::value(AnalysisStatus::Pending),
            )
            .col_expr(
                entity::edital::Column::ErrorMessage,
                Expr::value(None::<String>),
            )
            .col_expr(
                entity::edital::Column::ProcessingStartedAt,
                Expr::value(None::<NaiveDateTime>),
            )
            .col_expr(
                entity::edital::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::edital::Column::Id.eq(edital_id))
            .filter(entity::edital::Column::AnalysisStatus.eq(AnalysisStatus::Failed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// PROCESSING editais whose attempt started before the cutoff, for the
    /// stuck-analysis recovery sweep.
    pub async fn find_stuck(
        &self,
        cutoff: NaiveDateTime,
    ) -> Result<Vec<entity::edital::Model>, DbErr> {
        entity::prelude::Edital::find()
            .filter(entity::edital::Column::AnalysisStatus.eq(AnalysisStatus::Processing))
            .filter(entity::edital::Column::ProcessingStartedAt.lt(cutoff))
            .all(self.db)
            .await
    }

    pub async fn delete_by_id(&self, edital_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Edital::delete_by_id(edital_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_company(&self, company_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Edital::delete_many()
            .filter(entity::edital::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

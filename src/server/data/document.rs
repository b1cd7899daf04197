use chrono::{NaiveDate, Utc};
use migration::{CaseStatement, Expr};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::document::ValidityStatus;

use crate::server::model::document::{NewDocument, NewDocumentVersion};

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a document at version 1 with a precomputed validity status.
    pub async fn create(
        &self,
        company_id: i32,
        document: NewDocument,
        validity_status: ValidityStatus,
    ) -> Result<entity::document::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Document::insert(entity::document::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            name: ActiveValue::Set(document.name),
            document_type: ActiveValue::Set(document.document_type),
            file_path: ActiveValue::Set(document.file_path),
            file_size: ActiveValue::Set(document.file_size),
            mime_type: ActiveValue::Set(document.mime_type),
            issue_date: ActiveValue::Set(document.issue_date),
            expiry_date: ActiveValue::Set(document.expiry_date),
            validity_status: ActiveValue::Set(validity_status),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::CompanyId.eq(company_id))
            .all(self.db)
            .await
    }

    /// Documents whose validity status can change over time.
    ///
    /// Covers every document with an expiry date plus any document whose
    /// stored status disagrees with a null expiry date (for example after an
    /// expiry date was cleared by a new version).
    pub async fn find_recomputable(&self) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(
                Condition::any()
                    .add(entity::document::Column::ExpiryDate.is_not_null())
                    .add(
                        entity::document::Column::ValidityStatus
                            .ne(ValidityStatus::NotApplicable),
                    ),
            )
            .all(self.db)
            .await
    }

    /// Documents the alert sweep watches: anything with an expiry date.
    pub async fn find_with_expiry(&self) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::ExpiryDate.is_not_null())
            .all(self.db)
            .await
    }

    /// Batch-persist recomputed validity statuses.
    ///
    /// Only documents whose status actually changed should be passed in so
    /// `updated_at` stays meaningful.
    pub async fn update_validity_statuses(
        &self,
        updates: Vec<(i32, ValidityStatus)>,
    ) -> Result<usize, DbErr> {
        if updates.is_empty() {
            return Ok(0);
        }

        const BATCH_SIZE: usize = 100;
        let count = updates.len();

        for batch in updates.chunks(BATCH_SIZE) {
            let mut case_stmt = CaseStatement::new();
            let document_ids: Vec<i32> = batch.iter().map(|(id, _)| *id).collect();

            for (document_id, status) in batch {
                case_stmt = case_stmt.case(
                    entity::document::Column::Id.eq(*document_id),
                    Expr::value(*status),
                );
            }

            entity::prelude::Document::update_many()
                .col_expr(
                    entity::document::Column::ValidityStatus,
                    Expr::value(case_stmt),
                )
                .col_expr(
                    entity::document::Column::UpdatedAt,
                    Expr::value(Utc::now().naive_utc()),
                )
                .filter(entity::document::Column::Id.is_in(document_ids))
                .exec(self.db)
                .await?;
        }

        Ok(count)
    }

    /// Replace the document's current file reference and dates for a new
    /// version upload. The caller snapshots the new reference separately.
    pub async fn apply_version_bump(
        &self,
        document: entity::document::Model,
        version: NewDocumentVersion,
        validity_status: ValidityStatus,
    ) -> Result<entity::document::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        let next_version = document.version + 1;

        let mut active: entity::document::ActiveModel = document.into();
        active.file_path = ActiveValue::Set(version.file_path);
        active.file_size = ActiveValue::Set(version.file_size);
        active.issue_date = ActiveValue::Set(version.issue_date);
        active.expiry_date = ActiveValue::Set(version.expiry_date);
        active.validity_status = ActiveValue::Set(validity_status);
        active.version = ActiveValue::Set(next_version);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Set a new expiry date and the status derived from it.
    pub async fn update_expiry_date(
        &self,
        document: entity::document::Model,
        expiry_date: Option<NaiveDate>,
        validity_status: ValidityStatus,
    ) -> Result<entity::document::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        let mut active: entity::document::ActiveModel = document.into();
        active.expiry_date = ActiveValue::Set(expiry_date);
        active.validity_status = ActiveValue::Set(validity_status);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_company(&self, company_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Document::delete_many()
            .filter(entity::document::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

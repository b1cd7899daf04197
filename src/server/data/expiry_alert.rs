use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use entity::expiry_alert::AlertType;

pub struct ExpiryAlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExpiryAlertRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fast-path existence check for a (document, threshold) pair.
    ///
    /// The unique index remains the authoritative guard; see [`try_create`].
    ///
    /// [`try_create`]: Self::try_create
    pub async fn exists(&self, document_id: i32, alert_type: AlertType) -> Result<bool, DbErr> {
        let found = entity::prelude::ExpiryAlert::find()
            .filter(entity::expiry_alert::Column::DocumentId.eq(document_id))
            .filter(entity::expiry_alert::Column::AlertType.eq(alert_type))
            .one(self.db)
            .await?;

        Ok(found.is_some())
    }

    /// Create an undispatched alert for a (document, threshold) pair.
    ///
    /// Returns `Ok(None)` when a concurrent creator won the race: the unique
    /// index on (document_id, alert_type) rejects the second insert and the
    /// violation is treated as a no-op, not an error.
    pub async fn try_create(
        &self,
        document_id: i32,
        alert_type: AlertType,
    ) -> Result<Option<entity::expiry_alert::Model>, DbErr> {
        let insert = entity::prelude::ExpiryAlert::insert(entity::expiry_alert::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            alert_type: ActiveValue::Set(alert_type),
            sent_at: ActiveValue::Set(None),
            email_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await;

        match insert {
            Ok(model) => Ok(Some(model)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Ok(None),
                _ => Err(e),
            },
        }
    }

    /// Alerts created but not yet handed to the notification sink, paired
    /// with their documents for the payload.
    pub async fn find_undispatched(
        &self,
    ) -> Result<Vec<(entity::expiry_alert::Model, entity::document::Model)>, DbErr> {
        let rows = entity::prelude::ExpiryAlert::find()
            .find_also_related(entity::prelude::Document)
            .filter(entity::expiry_alert::Column::EmailSent.eq(false))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(alert, document)| document.map(|d| (alert, d)))
            .collect())
    }

    /// Undispatched alerts for one document, used by the on-change sweep.
    pub async fn find_undispatched_for_document(
        &self,
        document_id: i32,
    ) -> Result<Vec<entity::expiry_alert::Model>, DbErr> {
        entity::prelude::ExpiryAlert::find()
            .filter(entity::expiry_alert::Column::DocumentId.eq(document_id))
            .filter(entity::expiry_alert::Column::EmailSent.eq(false))
            .all(self.db)
            .await
    }

    pub async fn mark_dispatched(
        &self,
        alert_id: i32,
        sent_at: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        use migration::Expr;

        let result = entity::prelude::ExpiryAlert::update_many()
            .col_expr(entity::expiry_alert::Column::EmailSent, Expr::value(true))
            .col_expr(
                entity::expiry_alert::Column::SentAt,
                Expr::value(Some(sent_at)),
            )
            .filter(entity::expiry_alert::Column::Id.eq(alert_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_document(&self, document_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ExpiryAlert::delete_many()
            .filter(entity::expiry_alert::Column::DocumentId.eq(document_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

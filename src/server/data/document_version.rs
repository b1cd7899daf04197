use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct DocumentVersionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentVersionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Snapshot a document's file reference at a version. Snapshots are
    /// immutable; the (document_id, version) unique index rejects a second
    /// snapshot for the same version.
    pub async fn create(
        &self,
        document_id: i32,
        version: i32,
        file_path: &str,
        file_size: i64,
    ) -> Result<entity::document_version::Model, DbErr> {
        entity::prelude::DocumentVersion::insert(entity::document_version::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            version: ActiveValue::Set(version),
            file_path: ActiveValue::Set(file_path.to_string()),
            file_size: ActiveValue::Set(file_size),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Version history for a document, newest first.
    pub async fn find_by_document(
        &self,
        document_id: i32,
    ) -> Result<Vec<entity::document_version::Model>, DbErr> {
        entity::prelude::DocumentVersion::find()
            .filter(entity::document_version::Column::DocumentId.eq(document_id))
            .order_by_desc(entity::document_version::Column::Version)
            .all(self.db)
            .await
    }

    pub async fn delete_by_document(&self, document_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DocumentVersion::delete_many()
            .filter(entity::document_version::Column::DocumentId.eq(document_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

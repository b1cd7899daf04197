use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000004_document::Document;

static IDX_EXPIRY_ALERT_DOCUMENT_ID_ALERT_TYPE: &str = "idx-expiry_alert-document_id-alert_type";
static FK_EXPIRY_ALERT_DOCUMENT_ID: &str = "fk-expiry_alert-document_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExpiryAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(ExpiryAlert::Id))
                    .col(integer(ExpiryAlert::DocumentId))
                    .col(string(ExpiryAlert::AlertType))
                    .col(timestamp_null(ExpiryAlert::SentAt))
                    .col(boolean(ExpiryAlert::EmailSent))
                    .col(timestamp(ExpiryAlert::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXPIRY_ALERT_DOCUMENT_ID_ALERT_TYPE)
                    .table(ExpiryAlert::Table)
                    .col(ExpiryAlert::DocumentId)
                    .col(ExpiryAlert::AlertType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXPIRY_ALERT_DOCUMENT_ID)
                    .from_tbl(ExpiryAlert::Table)
                    .from_col(ExpiryAlert::DocumentId)
                    .to_tbl(Document::Table)
                    .to_col(Document::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXPIRY_ALERT_DOCUMENT_ID)
                    .table(ExpiryAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXPIRY_ALERT_DOCUMENT_ID_ALERT_TYPE)
                    .table(ExpiryAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExpiryAlert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ExpiryAlert {
    Table,
    Id,
    DocumentId,
    AlertType,
    SentAt,
    EmailSent,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000004_document::Document;

static IDX_DOCUMENT_VERSION_DOCUMENT_ID_VERSION: &str = "idx-document_version-document_id-version";
static FK_DOCUMENT_VERSION_DOCUMENT_ID: &str = "fk-document_version-document_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentVersion::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentVersion::Id))
                    .col(integer(DocumentVersion::DocumentId))
                    .col(integer(DocumentVersion::Version))
                    .col(string(DocumentVersion::FilePath))
                    .col(big_integer(DocumentVersion::FileSize))
                    .col(timestamp(DocumentVersion::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DOCUMENT_VERSION_DOCUMENT_ID_VERSION)
                    .table(DocumentVersion::Table)
                    .col(DocumentVersion::DocumentId)
                    .col(DocumentVersion::Version)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOCUMENT_VERSION_DOCUMENT_ID)
                    .from_tbl(DocumentVersion::Table)
                    .from_col(DocumentVersion::DocumentId)
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
                    .name(FK_DOCUMENT_VERSION_DOCUMENT_ID)
                    .table(DocumentVersion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DOCUMENT_VERSION_DOCUMENT_ID_VERSION)
                    .table(DocumentVersion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DocumentVersion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocumentVersion {
    Table,
    Id,
    DocumentId,
    Version,
    FilePath,
    FileSize,
    CreatedAt,
}

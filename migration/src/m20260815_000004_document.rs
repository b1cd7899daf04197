use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_company::Company;

static IDX_DOCUMENT_COMPANY_ID: &str = "idx-document-company_id";
static IDX_DOCUMENT_EXPIRY_DATE: &str = "idx-document-expiry_date";
static FK_DOCUMENT_COMPANY_ID: &str = "fk-document-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(integer(Document::CompanyId))
                    .col(string(Document::Name))
                    .col(string(Document::DocumentType))
                    .col(string(Document::FilePath))
                    .col(big_integer(Document::FileSize))
                    .col(string_null(Document::MimeType))
                    .col(date_null(Document::IssueDate))
                    .col(date_null(Document::ExpiryDate))
                    .col(string(Document::ValidityStatus))
                    .col(integer(Document::Version))
                    .col(timestamp(Document::CreatedAt))
                    .col(timestamp(Document::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DOCUMENT_COMPANY_ID)
                    .table(Document::Table)
                    .col(Document::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DOCUMENT_EXPIRY_DATE)
                    .table(Document::Table)
                    .col(Document::ExpiryDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOCUMENT_COMPANY_ID)
                    .from_tbl(Document::Table)
                    .from_col(Document::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DOCUMENT_COMPANY_ID)
                    .table(Document::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DOCUMENT_EXPIRY_DATE)
                    .table(Document::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DOCUMENT_COMPANY_ID)
                    .table(Document::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    CompanyId,
    Name,
    DocumentType,
    FilePath,
    FileSize,
    MimeType,
    IssueDate,
    ExpiryDate,
    ValidityStatus,
    Version,
    CreatedAt,
    UpdatedAt,
}

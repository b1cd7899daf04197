use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_company::Company;

static IDX_EDITAL_COMPANY_ID: &str = "idx-edital-company_id";
static IDX_EDITAL_ANALYSIS_STATUS: &str = "idx-edital-analysis_status";
static FK_EDITAL_COMPANY_ID: &str = "fk-edital-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Edital::Table)
                    .if_not_exists()
                    .col(pk_auto(Edital::Id))
                    .col(integer(Edital::CompanyId))
                    .col(string(Edital::OriginalFilename))
                    .col(string(Edital::FilePath))
                    .col(big_integer(Edital::FileSize))
                    .col(string(Edital::AnalysisStatus))
                    .col(text_null(Edital::ErrorMessage))
                    .col(timestamp_null(Edital::ProcessingStartedAt))
                    .col(timestamp_null(Edital::AnalyzedAt))
                    .col(timestamp(Edital::CreatedAt))
                    .col(timestamp(Edital::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EDITAL_COMPANY_ID)
                    .table(Edital::Table)
                    .col(Edital::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EDITAL_ANALYSIS_STATUS)
                    .table(Edital::Table)
                    .col(Edital::AnalysisStatus)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EDITAL_COMPANY_ID)
                    .from_tbl(Edital::Table)
                    .from_col(Edital::CompanyId)
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
                    .name(FK_EDITAL_COMPANY_ID)
                    .table(Edital::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EDITAL_ANALYSIS_STATUS)
                    .table(Edital::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EDITAL_COMPANY_ID)
                    .table(Edital::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Edital::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Edital {
    Table,
    Id,
    CompanyId,
    OriginalFilename,
    FilePath,
    FileSize,
    AnalysisStatus,
    ErrorMessage,
    ProcessingStartedAt,
    AnalyzedAt,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000007_edital::Edital;

static FK_EDITAL_ANALYSIS_EDITAL_ID: &str = "fk-edital_analysis-edital_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EditalAnalysis::Table)
                    .if_not_exists()
                    .col(pk_auto(EditalAnalysis::Id))
                    .col(integer_uniq(EditalAnalysis::EditalId))
                    .col(string_null(EditalAnalysis::OrganizacaoLicitante))
                    .col(string_null(EditalAnalysis::ModalidadeLicitacao))
                    .col(string_null(EditalAnalysis::NumeroProcesso))
                    .col(timestamp_null(EditalAnalysis::DataAberturaPropostas))
                    .col(timestamp_null(EditalAnalysis::DataSessaoPublica))
                    .col(text_null(EditalAnalysis::ObjetoLicitacao))
                    .col(string_null(EditalAnalysis::CriterioJulgamento))
                    .col(double_null(EditalAnalysis::ValorEstimado))
                    .col(timestamp(EditalAnalysis::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EDITAL_ANALYSIS_EDITAL_ID)
                    .from_tbl(EditalAnalysis::Table)
                    .from_col(EditalAnalysis::EditalId)
                    .to_tbl(Edital::Table)
                    .to_col(Edital::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EDITAL_ANALYSIS_EDITAL_ID)
                    .table(EditalAnalysis::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EditalAnalysis::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EditalAnalysis {
    Table,
    Id,
    EditalId,
    OrganizacaoLicitante,
    ModalidadeLicitacao,
    NumeroProcesso,
    DataAberturaPropostas,
    DataSessaoPublica,
    ObjetoLicitacao,
    CriterioJulgamento,
    ValorEstimado,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000007_edital::Edital;

static IDX_HABILITACAO_REQUIREMENT_EDITAL_ID: &str = "idx-habilitacao_requirement-edital_id";
static FK_HABILITACAO_REQUIREMENT_EDITAL_ID: &str = "fk-habilitacao_requirement-edital_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HabilitacaoRequirement::Table)
                    .if_not_exists()
                    .col(pk_auto(HabilitacaoRequirement::Id))
                    .col(integer(HabilitacaoRequirement::EditalId))
                    .col(string(HabilitacaoRequirement::RequirementType))
                    .col(text(HabilitacaoRequirement::Description))
                    .col(string_null(HabilitacaoRequirement::DocumentType))
                    .col(boolean(HabilitacaoRequirement::IsMandatory))
                    .col(timestamp(HabilitacaoRequirement::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HABILITACAO_REQUIREMENT_EDITAL_ID)
                    .table(HabilitacaoRequirement::Table)
                    .col(HabilitacaoRequirement::EditalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HABILITACAO_REQUIREMENT_EDITAL_ID)
                    .from_tbl(HabilitacaoRequirement::Table)
                    .from_col(HabilitacaoRequirement::EditalId)
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
                    .name(FK_HABILITACAO_REQUIREMENT_EDITAL_ID)
                    .table(HabilitacaoRequirement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HABILITACAO_REQUIREMENT_EDITAL_ID)
                    .table(HabilitacaoRequirement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(HabilitacaoRequirement::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HabilitacaoRequirement {
    Table,
    Id,
    EditalId,
    RequirementType,
    Description,
    DocumentType,
    IsMandatory,
    CreatedAt,
}

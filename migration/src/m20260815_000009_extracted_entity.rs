use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000007_edital::Edital;

static IDX_EXTRACTED_ENTITY_EDITAL_ID: &str = "idx-extracted_entity-edital_id";
static FK_EXTRACTED_ENTITY_EDITAL_ID: &str = "fk-extracted_entity-edital_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExtractedEntity::Table)
                    .if_not_exists()
                    .col(pk_auto(ExtractedEntity::Id))
                    .col(integer(ExtractedEntity::EditalId))
                    .col(string(ExtractedEntity::EntityType))
                    .col(text(ExtractedEntity::EntityValue))
                    .col(double(ExtractedEntity::Confidence))
                    .col(integer(ExtractedEntity::StartPosition))
                    .col(integer(ExtractedEntity::EndPosition))
                    .col(timestamp(ExtractedEntity::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXTRACTED_ENTITY_EDITAL_ID)
                    .table(ExtractedEntity::Table)
                    .col(ExtractedEntity::EditalId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXTRACTED_ENTITY_EDITAL_ID)
                    .from_tbl(ExtractedEntity::Table)
                    .from_col(ExtractedEntity::EditalId)
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
                    .name(FK_EXTRACTED_ENTITY_EDITAL_ID)
                    .table(ExtractedEntity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXTRACTED_ENTITY_EDITAL_ID)
                    .table(ExtractedEntity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExtractedEntity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ExtractedEntity {
    Table,
    Id,
    EditalId,
    EntityType,
    EntityValue,
    Confidence,
    StartPosition,
    EndPosition,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_company::Company;

static IDX_USER_COMPANY_ID: &str = "idx-user-company_id";
static FK_USER_COMPANY_ID: &str = "fk-user-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(integer(User::CompanyId))
                    .col(string_uniq(User::Email))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_COMPANY_ID)
                    .table(User::Table)
                    .col(User::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_COMPANY_ID)
                    .from_tbl(User::Table)
                    .from_col(User::CompanyId)
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
                    .name(FK_USER_COMPANY_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_COMPANY_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    CompanyId,
    Email,
    FirstName,
    LastName,
    CreatedAt,
    UpdatedAt,
}

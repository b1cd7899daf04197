use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_company::Company;

static FK_SUBSCRIPTION_COMPANY_ID: &str = "fk-subscription-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscription::Id))
                    .col(integer_uniq(Subscription::CompanyId))
                    .col(string(Subscription::Status))
                    .col(date(Subscription::CurrentPeriodStart))
                    .col(date(Subscription::CurrentPeriodEnd))
                    .col(integer(Subscription::AnalysesUsed))
                    .col(timestamp(Subscription::CreatedAt))
                    .col(timestamp(Subscription::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_COMPANY_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::CompanyId)
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
                    .name(FK_SUBSCRIPTION_COMPANY_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    Id,
    CompanyId,
    Status,
    CurrentPeriodStart,
    CurrentPeriodEnd,
    AnalysesUsed,
    CreatedAt,
    UpdatedAt,
}

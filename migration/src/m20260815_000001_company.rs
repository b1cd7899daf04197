use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string(Company::RazaoSocial))
                    .col(string_null(Company::NomeFantasia))
                    .col(string_uniq(Company::Cnpj))
                    .col(text_null(Company::Endereco))
                    .col(string_null(Company::Telefone))
                    .col(string_null(Company::Email))
                    .col(timestamp(Company::CreatedAt))
                    .col(timestamp(Company::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    RazaoSocial,
    NomeFantasia,
    Cnpj,
    Endereco,
    Telefone,
    Email,
    CreatedAt,
    UpdatedAt,
}

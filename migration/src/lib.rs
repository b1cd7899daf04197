pub use sea_orm_migration::prelude::*;

mod m20260815_000001_company;
mod m20260815_000002_user;
mod m20260815_000003_subscription;
mod m20260815_000004_document;
mod m20260815_000005_document_version;
mod m20260815_000006_expiry_alert;
mod m20260815_000007_edital;
mod m20260815_000008_edital_analysis;
mod m20260815_000009_extracted_entity;
mod m20260815_000010_habilitacao_requirement;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_company::Migration),
            Box::new(m20260815_000002_user::Migration),
            Box::new(m20260815_000003_subscription::Migration),
            Box::new(m20260815_000004_document::Migration),
            Box::new(m20260815_000005_document_version::Migration),
            Box::new(m20260815_000006_expiry_alert::Migration),
            Box::new(m20260815_000007_edital::Migration),
            Box::new(m20260815_000008_edital_analysis::Migration),
            Box::new(m20260815_000009_extracted_entity::Migration),
            Box::new(m20260815_000010_habilitacao_requirement::Migration),
        ]
    }
}

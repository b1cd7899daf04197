//! Company registration and cascade deletion.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        analysis::AnalysisRepository, company::CompanyRepository, document::DocumentRepository,
        document_version::DocumentVersionRepository, edital::EditalRepository,
        expiry_alert::ExpiryAlertRepository, subscription::SubscriptionRepository,
        user::UserRepository,
    },
    error::{company::CompanyError, Error},
    model::company::NewCompany,
};

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of [`CompanyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a company with its initial subscription.
    ///
    /// CNPJ is the identity key; a second registration with the same CNPJ is
    /// rejected before anything is written.
    pub async fn register(&self, company: NewCompany) -> Result<entity::company::Model, Error> {
        if let Some(existing) = CompanyRepository::new(self.db)
            .find_by_cnpj(&company.cnpj)
            .await?
        {
            return Err(CompanyError::DuplicateCnpj(existing.cnpj).into());
        }

        let txn = self.db.begin().await?;

        let created = CompanyRepository::new(&txn).create(company).await?;
        SubscriptionRepository::new(&txn)
            .create_initial(created.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Registered company {} ({})", created.id, created.cnpj);

        Ok(created)
    }

    /// Delete a company and everything it owns.
    ///
    /// Cascade order follows the ownership graph leaf-first: analysis results
    /// before editais, versions and alerts before documents, then users,
    /// subscription, and finally the company row itself, all in one
    /// transaction.
    pub async fn delete_company(&self, company_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let company_repo = CompanyRepository::new(&txn);
        company_repo
            .find_by_id(company_id)
            .await?
            .ok_or(CompanyError::NotFound(company_id))?;

        let edital_repo = EditalRepository::new(&txn);
        let analysis_repo = AnalysisRepository::new(&txn);
        for edital in edital_repo.find_by_company(company_id).await? {
            analysis_repo.delete_results(edital.id).await?;
        }
        edital_repo.delete_by_company(company_id).await?;

        let document_repo = DocumentRepository::new(&txn);
        let version_repo = DocumentVersionRepository::new(&txn);
        let alert_repo = ExpiryAlertRepository::new(&txn);
        for document in document_repo.find_by_company(company_id).await? {
            version_repo.delete_by_document(document.id).await?;
            alert_repo.delete_by_document(document.id).await?;
        }
        document_repo.delete_by_company(company_id).await?;

        UserRepository::new(&txn).delete_by_company(company_id).await?;
        SubscriptionRepository::new(&txn)
            .delete_by_company(company_id)
            .await?;
        company_repo.delete(company_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted company {} and its owned records", company_id);

        Ok(())
    }
}

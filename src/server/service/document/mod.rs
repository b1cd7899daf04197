//! Document lifecycle and validity derivation.

pub mod validity;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        document::DocumentRepository, document_version::DocumentVersionRepository,
        expiry_alert::ExpiryAlertRepository,
    },
    error::{document::DocumentError, Error},
    model::document::{DocumentSummary, ExpiringDocument, NewDocument, NewDocumentVersion},
};

use self::validity::{classify, days_until_expiry, EXPIRY_WARNING_WINDOW_DAYS};

/// Service owning document creation, version bumps, validity recomputation,
/// and the per-company summary.
pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    /// Creates a new instance of [`DocumentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a document at version 1 and snapshot its file reference.
    ///
    /// The initial validity status is derived from the expiry date at upload
    /// time; the snapshot makes version history complete from the start.
    pub async fn create_document(
        &self,
        company_id: i32,
        document: NewDocument,
    ) -> Result<entity::document::Model, Error> {
        let status = classify(document.expiry_date, Utc::now().date_naive());

        let txn = self.db.begin().await?;

        let created = DocumentRepository::new(&txn)
            .create(company_id, document, status)
            .await?;
        DocumentVersionRepository::new(&txn)
            .create(created.id, created.version, &created.file_path, created.file_size)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Created document {} (company {}) at version 1",
            created.id,
            company_id
        );

        Ok(created)
    }

    /// Upload a new version of an existing document.
    ///
    /// Bumps the version, replaces the current file reference and dates,
    /// recomputes validity from the new expiry date, and snapshots the new
    /// reference. History stays append-only.
    pub async fn add_version(
        &self,
        document_id: i32,
        version: NewDocumentVersion,
    ) -> Result<entity::document::Model, Error> {
        let txn = self.db.begin().await?;

        let document_repo = DocumentRepository::new(&txn);
        let document = document_repo
            .find_by_id(document_id)
            .await?
            .ok_or(DocumentError::NotFound(document_id))?;

        let status = classify(version.expiry_date, Utc::now().date_naive());
        let updated = document_repo
            .apply_version_bump(document, version, status)
            .await?;
        DocumentVersionRepository::new(&txn)
            .create(updated.id, updated.version, &updated.file_path, updated.file_size)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Document {} bumped to version {}",
            updated.id,
            updated.version
        );

        Ok(updated)
    }

    /// Correct a document's expiry date and rederive its status.
    ///
    /// Callers that watch thresholds should follow up with an alert sweep for
    /// this document.
    pub async fn update_expiry_date(
        &self,
        document_id: i32,
        expiry_date: Option<chrono::NaiveDate>,
    ) -> Result<entity::document::Model, Error> {
        let document_repo = DocumentRepository::new(self.db);
        let document = document_repo
            .find_by_id(document_id)
            .await?
            .ok_or(DocumentError::NotFound(document_id))?;

        let status = classify(expiry_date, Utc::now().date_naive());
        let updated = document_repo
            .update_expiry_date(document, expiry_date, status)
            .await?;

        Ok(updated)
    }

    /// Recompute validity statuses for every document that can drift.
    ///
    /// Persists only documents whose derived status differs from the stored
    /// one, so a second run with no date changes writes nothing. Returns the
    /// number of documents updated.
    pub async fn recompute_validity_statuses(&self) -> Result<usize, Error> {
        let document_repo = DocumentRepository::new(self.db);
        let today = Utc::now().date_naive();

        let documents = document_repo.find_recomputable().await?;
        let updates: Vec<_> = documents
            .into_iter()
            .filter_map(|document| {
                let computed = classify(document.expiry_date, today);
                (computed != document.validity_status).then_some((document.id, computed))
            })
            .collect();

        let updated = document_repo.update_validity_statuses(updates).await?;

        if updated > 0 {
            tracing::info!("Validity recomputation updated {} document(s)", updated);
        }

        Ok(updated)
    }

    /// Per-company aggregate for the dashboard, classified live.
    pub async fn document_summary(&self, company_id: i32) -> Result<DocumentSummary, Error> {
        let documents = DocumentRepository::new(self.db)
            .find_by_company(company_id)
            .await?;
        let today = Utc::now().date_naive();

        let mut by_type = HashMap::new();
        let mut by_status = HashMap::new();
        let mut expiring = Vec::new();

        for document in &documents {
            let status = classify(document.expiry_date, today);
            *by_type.entry(document.document_type).or_insert(0) += 1;
            *by_status.entry(status).or_insert(0) += 1;

            if let Some(expiry_date) = document.expiry_date {
                let days = days_until_expiry(expiry_date, today);
                if (0..=EXPIRY_WARNING_WINDOW_DAYS).contains(&days) {
                    expiring.push(ExpiringDocument {
                        document_id: document.id,
                        name: document.name.clone(),
                        document_type: document.document_type,
                        expiry_date,
                        days_until_expiry: days,
                    });
                }
            }
        }

        expiring.sort_by_key(|document| document.days_until_expiry);

        Ok(DocumentSummary {
            company_id,
            total: documents.len(),
            by_type,
            by_status,
            expiring,
        })
    }

    /// Delete a document with its version history and alerts.
    pub async fn delete_document(&self, document_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let document_repo = DocumentRepository::new(&txn);
        document_repo
            .find_by_id(document_id)
            .await?
            .ok_or(DocumentError::NotFound(document_id))?;

        DocumentVersionRepository::new(&txn)
            .delete_by_document(document_id)
            .await?;
        ExpiryAlertRepository::new(&txn)
            .delete_by_document(document_id)
            .await?;
        document_repo.delete(document_id).await?;

        txn.commit().await?;

        Ok(())
    }
}

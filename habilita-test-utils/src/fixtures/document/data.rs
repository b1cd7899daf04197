//! Document insertion utilities.
//!
//! Methods for inserting documents, version snapshots, and expiry alerts into
//! the test database. Inserted documents start at version 1 with a VALID
//! status; tests that care about derived state recompute it through the
//! engine rather than through these fixtures.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use entity::document::{DocumentType, ValidityStatus};
use entity::expiry_alert::AlertType;

use crate::{
    constant::TEST_FILE_PATH,
    error::TestError,
    model::{DocumentModel, DocumentVersionModel, ExpiryAlertModel},
    TestSetup,
};

impl TestSetup {
    /// Insert a mock document at version 1.
    ///
    /// # Arguments
    /// - `company_id` - Owning company record ID
    /// - `document_type` - Semantic document kind
    /// - `expiry_date` - Optional expiry date; `None` models a document that never expires
    ///
    /// # Returns
    /// - `Ok(DocumentModel)` - The created document record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_mock_document(
        &self,
        company_id: i32,
        document_type: DocumentType,
        expiry_date: Option<chrono::NaiveDate>,
    ) -> Result<DocumentModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Document::insert(entity::document::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            name: ActiveValue::Set("Documento de Teste".to_string()),
            document_type: ActiveValue::Set(document_type),
            file_path: ActiveValue::Set(TEST_FILE_PATH.to_string()),
            file_size: ActiveValue::Set(102_400),
            mime_type: ActiveValue::Set(Some("application/pdf".to_string())),
            issue_date: ActiveValue::Set(None),
            expiry_date: ActiveValue::Set(expiry_date),
            validity_status: ActiveValue::Set(ValidityStatus::Valid),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert a version snapshot row for a document.
    pub async fn insert_mock_document_version(
        &self,
        document_id: i32,
        version: i32,
    ) -> Result<DocumentVersionModel, TestError> {
        Ok(
            entity::prelude::DocumentVersion::insert(entity::document_version::ActiveModel {
                document_id: ActiveValue::Set(document_id),
                version: ActiveValue::Set(version),
                file_path: ActiveValue::Set(TEST_FILE_PATH.to_string()),
                file_size: ActiveValue::Set(102_400),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.db)
            .await?,
        )
    }

    /// Insert an undispatched expiry alert for a document and threshold.
    pub async fn insert_mock_alert(
        &self,
        document_id: i32,
        alert_type: AlertType,
    ) -> Result<ExpiryAlertModel, TestError> {
        Ok(
            entity::prelude::ExpiryAlert::insert(entity::expiry_alert::ActiveModel {
                document_id: ActiveValue::Set(document_id),
                alert_type: ActiveValue::Set(alert_type),
                sent_at: ActiveValue::Set(None),
                email_sent: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.db)
            .await?,
        )
    }
}

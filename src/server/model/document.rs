//! Document service inputs and dashboard summary types.

use std::collections::HashMap;

use chrono::NaiveDate;

use entity::document::{DocumentType, ValidityStatus};

/// Input for an initial document upload. The upload itself (file transfer,
/// storage) happens in the excluded web layer; the engine receives the
/// storage reference.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub document_type: DocumentType,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

/// Input for a new-version upload of an existing document.
///
/// The new file replaces the document's current storage reference and the
/// dates replace the current ones; the previous reference survives as a
/// version snapshot.
#[derive(Debug, Clone)]
pub struct NewDocumentVersion {
    pub file_path: String,
    pub file_size: i64,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

/// Per-company document aggregate for the dashboard.
///
/// Validity counts are classified live against the current date, not read
/// from the stored column.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub company_id: i32,
    pub total: usize,
    pub by_type: HashMap<DocumentType, usize>,
    pub by_status: HashMap<ValidityStatus, usize>,
    /// Documents expiring within the warning window, soonest first.
    pub expiring: Vec<ExpiringDocument>,
}

/// One document inside the expiry warning window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiringDocument {
    pub document_id: i32,
    pub name: String,
    pub document_type: DocumentType,
    pub expiry_date: NaiveDate,
    pub days_until_expiry: i64,
}

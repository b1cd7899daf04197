use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error, notifier::NotifierClient, service::document::DocumentService,
};

/// Recompute validity statuses for every document that can drift.
///
/// Returns the number of documents whose stored status changed.
pub async fn recompute_validity(
    db: DatabaseConnection,
    _notifier: NotifierClient,
) -> Result<usize, Error> {
    DocumentService::new(&db).recompute_validity_statuses().await
}

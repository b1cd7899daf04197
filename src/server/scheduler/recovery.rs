use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error, notifier::NotifierClient, scheduler::config::recovery::MAX_PROCESSING_MINUTES,
    service::analysis::AnalysisService,
};

/// Force-fail analyses stuck in PROCESSING past the configured limit.
///
/// Returns the number of editais flipped to FAILED.
pub async fn recover_stuck_analyses(
    db: DatabaseConnection,
    _notifier: NotifierClient,
) -> Result<usize, Error> {
    AnalysisService::recover_stuck(&db, Duration::minutes(MAX_PROCESSING_MINUTES)).await
}

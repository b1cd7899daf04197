use sea_orm::DatabaseConnection;

use crate::server::{error::Error, notifier::NotifierClient, service::alert::AlertService};

/// Create alerts for crossed expiry thresholds and dispatch the backlog.
///
/// Returns the number of alerts handed to the notification sink.
pub async fn sweep_alerts(
    db: DatabaseConnection,
    notifier: NotifierClient,
) -> Result<usize, Error> {
    AlertService::new(&db, &notifier).run_sweep().await
}

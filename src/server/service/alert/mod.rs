//! Expiry alert creation and dispatch.

#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::expiry_alert::AlertType;

use crate::server::{
    data::{document::DocumentRepository, expiry_alert::ExpiryAlertRepository},
    error::{alert::AlertError, Error},
    model::alert::AlertNotification,
    notifier::NotifierClient,
    service::document::validity::days_until_expiry,
};

/// Thresholds a document has crossed, given its days until expiry.
///
/// Thresholds are cumulative: a document seven days from expiry has crossed
/// the 30, 15, and 7 day marks, and an expired document has crossed all four.
/// Creating every crossed threshold makes a document uploaded already inside
/// a window still produce the alerts a subscriber expects; the unique index
/// on (document_id, alert_type) keeps each one effectively-once.
pub fn crossed_thresholds(days: i64) -> Vec<AlertType> {
    let mut thresholds = Vec::new();

    if days < 0 {
        thresholds.push(AlertType::Expired);
    }
    if days <= 7 {
        thresholds.push(AlertType::SevenDays);
    }
    if days <= 15 {
        thresholds.push(AlertType::FifteenDays);
    }
    if days <= 30 {
        thresholds.push(AlertType::ThirtyDays);
    }

    thresholds
}

/// Service owning the alert sweep: creating alert rows for crossed expiry
/// thresholds and handing undispatched rows to the notification sink.
pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a NotifierClient,
}

impl<'a> AlertService<'a> {
    /// Creates a new instance of [`AlertService`]
    pub fn new(db: &'a DatabaseConnection, notifier: &'a NotifierClient) -> Self {
        Self { db, notifier }
    }

    /// Full sweep over every dated document.
    ///
    /// Ensures an alert row exists for each crossed threshold, then dispatches
    /// everything still undispatched. A failed dispatch is logged and left for
    /// the next sweep. Returns the number of alerts dispatched.
    pub async fn run_sweep(&self) -> Result<usize, Error> {
        let documents = DocumentRepository::new(self.db).find_with_expiry().await?;
        let today = Utc::now().date_naive();

        let mut created = 0;
        for document in &documents {
            if let Some(expiry_date) = document.expiry_date {
                let days = days_until_expiry(expiry_date, today);
                created += self.ensure_alerts(document.id, days).await?;
            }
        }

        if created > 0 {
            tracing::info!("Alert sweep created {} new alert(s)", created);
        }

        self.dispatch_pending().await
    }

    /// Sweep a single document after an expiry-date change.
    pub async fn sweep_document(&self, document_id: i32) -> Result<usize, Error> {
        let document = DocumentRepository::new(self.db)
            .find_by_id(document_id)
            .await?
            .ok_or(AlertError::DocumentNotFound(document_id))?;

        let Some(expiry_date) = document.expiry_date else {
            return Ok(0);
        };

        let days = days_until_expiry(expiry_date, Utc::now().date_naive());
        self.ensure_alerts(document.id, days).await?;

        let alerts = ExpiryAlertRepository::new(self.db)
            .find_undispatched_for_document(document.id)
            .await?;

        let mut dispatched = 0;
        for alert in alerts {
            if self.dispatch_one(&alert, &document).await? {
                dispatched += 1;
            }
        }

        Ok(dispatched)
    }

    /// Hand every undispatched alert to the notification sink.
    pub async fn dispatch_pending(&self) -> Result<usize, Error> {
        let pending = ExpiryAlertRepository::new(self.db)
            .find_undispatched()
            .await?;

        let mut dispatched = 0;
        for (alert, document) in pending {
            if self.dispatch_one(&alert, &document).await? {
                dispatched += 1;
            }
        }

        Ok(dispatched)
    }

    /// Create the missing alert rows for a document's crossed thresholds.
    ///
    /// The `exists` check is a fast path; the insert still tolerates a
    /// concurrent creator through the unique index.
    async fn ensure_alerts(&self, document_id: i32, days: i64) -> Result<usize, Error> {
        let alert_repo = ExpiryAlertRepository::new(self.db);

        let mut created = 0;
        for threshold in crossed_thresholds(days) {
            if alert_repo.exists(document_id, threshold).await? {
                continue;
            }
            if alert_repo.try_create(document_id, threshold).await?.is_some() {
                created += 1;
            }
        }

        Ok(created)
    }

    async fn dispatch_one(
        &self,
        alert: &entity::expiry_alert::Model,
        document: &entity::document::Model,
    ) -> Result<bool, Error> {
        let notification = AlertNotification::new(alert, document);

        match self.notifier.dispatch(&notification).await {
            Ok(()) => {
                ExpiryAlertRepository::new(self.db)
                    .mark_dispatched(alert.id, Utc::now().naive_utc())
                    .await?;
                Ok(true)
            }
            Err(error) => {
                tracing::warn!(
                    "Failed to dispatch alert {} for document {}: {}",
                    alert.id,
                    document.id,
                    error
                );
                Ok(false)
            }
        }
    }
}

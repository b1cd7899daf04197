//! HTTP client for the notification sink.

use crate::server::model::alert::AlertNotification;

/// Client for the notification sink's `POST /notify` endpoint.
///
/// Dispatch is at-least-once: a non-2xx answer leaves the alert undispatched
/// and the next sweep retries it.
#[derive(Clone)]
pub struct NotifierClient {
    client: reqwest::Client,
    base_url: String,
}

impl NotifierClient {
    /// Creates a new instance of [`NotifierClient`]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Deliver one alert payload to the notification sink.
    pub async fn dispatch(&self, notification: &AlertNotification) -> Result<(), reqwest::Error> {
        self.client
            .post(format!("{}/notify", self.base_url))
            .json(notification)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

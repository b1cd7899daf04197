//! HTTP client for the extraction service.

use std::time::Duration;

use crate::server::{
    error::extractor::ExtractorError,
    model::extractor::{ExtractionRequest, ExtractionResponse},
};

/// Client for the extraction service's `POST /analyze` endpoint.
///
/// Extraction can take minutes for long notices; every request carries the
/// configured timeout so a stalled service maps to a terminal
/// [`ExtractorError::Timeout`] instead of hanging a worker.
#[derive(Clone)]
pub struct ExtractorClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ExtractorClient {
    /// Creates a new instance of [`ExtractorClient`]
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    /// Submit a stored edital file for extraction.
    ///
    /// Returns the raw response body on success. Payload validation is the
    /// caller's concern; this method only settles transport-level outcomes:
    /// timeouts, non-2xx statuses, and `success: false` bodies.
    pub async fn analyze(
        &self,
        file_path: &str,
        filename: &str,
    ) -> Result<ExtractionResponse, ExtractorError> {
        let request = ExtractionRequest {
            file_path: file_path.to_string(),
            filename: filename.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    ExtractorError::Timeout(self.timeout.as_secs())
                } else {
                    ExtractorError::Transport(error)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractorError::Status(status.as_u16()));
        }

        let body: ExtractionResponse = response.json().await.map_err(|error| {
            if error.is_timeout() {
                ExtractorError::Timeout(self.timeout.as_secs())
            } else {
                ExtractorError::Transport(error)
            }
        })?;

        if !body.success {
            let message = body
                .error
                .unwrap_or_else(|| "extraction service reported failure without a message".into());
            return Err(ExtractorError::Failed(message));
        }

        Ok(body)
    }
}

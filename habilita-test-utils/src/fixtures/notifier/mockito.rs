//! Mock `/notify` endpoint creation utilities.

use mockito::Mock;

use crate::TestSetup;

impl TestSetup {
    /// Create a mock `POST /notify` endpoint that accepts every alert.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_notify_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", "/notify")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"queued"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /notify` endpoint that fails with the given HTTP status.
    pub fn create_notify_failure_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", "/notify")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"notification service unavailable"}"#)
            .expect(expected_requests)
            .create()
    }
}

//! Mock `/analyze` endpoint creation utilities.
//!
//! Methods for registering mock extraction service endpoints with the mockito
//! server. Each returns the created `Mock` so the caller can assert the call
//! count directly or push it onto the setup for `assert_mocks`.

use std::io::Write;
use std::time::Duration;

use mockito::Mock;
use serde_json::Value;

use crate::TestSetup;

impl TestSetup {
    /// Create a mock `POST /analyze` endpoint returning the given body.
    ///
    /// # Arguments
    /// - `body` - JSON response payload
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_analyze_endpoint(&mut self, body: &Value, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /analyze` endpoint that fails with the given HTTP status.
    pub fn create_analyze_failure_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", "/analyze")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"analysis service unavailable"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /analyze` endpoint that stalls before responding.
    ///
    /// The response body is written only after `delay`, letting tests drive the
    /// extraction client past its request timeout.
    pub fn create_analyze_delayed_endpoint(
        &mut self,
        body: &Value,
        delay: Duration,
        expected_requests: usize,
    ) -> Mock {
        let payload = serde_json::to_string(body).unwrap();

        self.server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(move |writer| {
                std::thread::sleep(delay);
                writer.write_all(payload.as_bytes())
            })
            .expect(expected_requests)
            .create()
    }
}

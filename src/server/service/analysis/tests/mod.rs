pub use habilita_test_utils::prelude::*;

pub use crate::server::extractor::ExtractorClient;
pub use crate::server::service::analysis::AnalysisService;

use std::time::Duration;

/// Extraction client pointed at the test's mock server with a short timeout.
pub fn extractor_for(test: &TestSetup) -> ExtractorClient {
    ExtractorClient::new(test.server.url(), Duration::from_secs(5))
}

mod recover_stuck;

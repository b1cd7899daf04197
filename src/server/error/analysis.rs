use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Edital {0} not found")]
    EditalNotFound(i32),
    #[error("Edital {0} is not in a failed state, only failed analyses can be retried")]
    NotRetryable(i32),
    #[error("Edital {0} has no completed analysis")]
    NotCompleted(i32),
    // Rejected extractor output: out-of-range confidence, unknown document
    // type mappings, or a success response missing its summary.
    #[error("Invalid extraction payload: {0}")]
    InvalidPayload(String),
}

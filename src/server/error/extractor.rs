use thiserror::Error;

/// Failure modes of the extraction service client.
///
/// Every variant is terminal for the analysis attempt that triggered it; the
/// variant's message becomes the edital's recorded error.
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Extraction timed out after {0} seconds")]
    Timeout(u64),
    #[error("Extraction service returned HTTP {0}")]
    Status(u16),
    #[error("Extraction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Extraction failed: {0}")]
    Failed(String),
}

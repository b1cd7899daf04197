use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("Edital {0} not found")]
    EditalNotFound(i32),
    #[error("Edital {0} has not completed analysis, compliance cannot be evaluated yet")]
    AnalysisNotCompleted(i32),
}

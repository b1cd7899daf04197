use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document {0} not found")]
    NotFound(i32),
}

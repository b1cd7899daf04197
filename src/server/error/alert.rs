use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Cannot sweep alerts for missing document {0}")]
    DocumentNotFound(i32),
}

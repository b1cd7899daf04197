use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompanyError {
    #[error("A company with CNPJ {0} is already registered")]
    DuplicateCnpj(String),
    #[error("Company {0} not found")]
    NotFound(i32),
}

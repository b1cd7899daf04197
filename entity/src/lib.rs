pub mod prelude;

pub mod company;
pub mod document;
pub mod document_version;
pub mod edital;
pub mod edital_analysis;
pub mod expiry_alert;
pub mod extracted_entity;
pub mod habilitacao_requirement;
pub mod subscription;
pub mod user;

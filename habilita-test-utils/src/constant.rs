//! Shared constant values for test fixtures.
//!
//! These are placeholder values used across repository and service tests. None
//! of them reference a real company or document.

/// CNPJ used for the default mock company.
pub static TEST_CNPJ: &str = "12.345.678/0001-90";

/// Secondary CNPJ for tests that need a second company.
pub static TEST_CNPJ_ALT: &str = "98.765.432/0001-10";

/// Contact email used for mock companies and users.
pub static TEST_EMAIL: &str = "licitacoes@example.com.br";

/// Storage path used for mock document and edital uploads.
pub static TEST_FILE_PATH: &str = "uploads/test/arquivo.pdf";

//! Company registration input.

/// Input for registering a new company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub razao_social: String,
    pub nome_fantasia: Option<String>,
    pub cnpj: String,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

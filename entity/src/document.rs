use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub document_type: DocumentType,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: Option<String>,
    pub issue_date: Option<Date>,
    pub expiry_date: Option<Date>,
    pub validity_status: ValidityStatus,
    pub version: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Fixed catalog of document kinds required in Brazilian public procurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DocumentType {
    #[sea_orm(string_value = "CONTRATO_SOCIAL")]
    ContratoSocial,
    #[sea_orm(string_value = "CND_FEDERAL")]
    CndFederal,
    #[sea_orm(string_value = "CND_ESTADUAL")]
    CndEstadual,
    #[sea_orm(string_value = "CND_MUNICIPAL")]
    CndMunicipal,
    #[sea_orm(string_value = "CERTIDAO_FGTS")]
    CertidaoFgts,
    #[sea_orm(string_value = "CERTIDAO_TRABALHISTA")]
    CertidaoTrabalhista,
    #[sea_orm(string_value = "ALVARA_FUNCIONAMENTO")]
    AlvaraFuncionamento,
    #[sea_orm(string_value = "ATESTADO_CAPACIDADE_TECNICA")]
    AtestadoCapacidadeTecnica,
    #[sea_orm(string_value = "BALANCO_PATRIMONIAL")]
    BalancoPatrimonial,
    #[sea_orm(string_value = "DEMONSTRACAO_RESULTADOS")]
    DemonstracaoResultados,
    #[sea_orm(string_value = "CERTIDAO_FALENCIA")]
    CertidaoFalencia,
    #[sea_orm(string_value = "OUTROS")]
    Outros,
}

/// Derived classification of a document's currency relative to its expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ValidityStatus {
    #[sea_orm(string_value = "VALID")]
    Valid,
    #[sea_orm(string_value = "EXPIRING_SOON")]
    ExpiringSoon,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
    #[sea_orm(string_value = "NOT_APPLICABLE")]
    NotApplicable,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(has_many = "super::document_version::Entity")]
    DocumentVersion,
    #[sea_orm(has_many = "super::expiry_alert::Entity")]
    ExpiryAlert,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::document_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentVersion.def()
    }
}

impl Related<super::expiry_alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpiryAlert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

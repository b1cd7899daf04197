use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "edital")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub original_filename: String,
    pub file_path: String,
    pub file_size: i64,
    pub analysis_status: AnalysisStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_message: Option<String>,
    pub processing_started_at: Option<DateTime>,
    pub analyzed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Lifecycle of an uploaded edital; Completed and Failed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AnalysisStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PROCESSING")]
    Processing,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(has_one = "super::edital_analysis::Entity")]
    EditalAnalysis,
    #[sea_orm(has_many = "super::extracted_entity::Entity")]
    ExtractedEntity,
    #[sea_orm(has_many = "super::habilitacao_requirement::Entity")]
    HabilitacaoRequirement,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::edital_analysis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EditalAnalysis.def()
    }
}

impl Related<super::extracted_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExtractedEntity.def()
    }
}

impl Related<super::habilitacao_requirement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HabilitacaoRequirement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

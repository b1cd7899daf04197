use sea_orm::entity::prelude::*;

/// Structured summary extracted from an edital, at most one per edital.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "edital_analysis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub edital_id: i32,
    pub organizacao_licitante: Option<String>,
    pub modalidade_licitacao: Option<String>,
    pub numero_processo: Option<String>,
    pub data_abertura_propostas: Option<DateTime>,
    pub data_sessao_publica: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub objeto_licitacao: Option<String>,
    pub criterio_julgamento: Option<String>,
    pub valor_estimado: Option<f64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::edital::Entity",
        from = "Column::EditalId",
        to = "super::edital::Column::Id"
    )]
    Edital,
}

impl Related<super::edital::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Edital.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

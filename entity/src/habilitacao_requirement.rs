use sea_orm::entity::prelude::*;

use super::document::DocumentType;

/// Qualification requirement extracted from an edital. The free-form
/// `requirement_type` carries the extractor's category label; only
/// `document_type` is the closed enum used for compliance matching.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "habilitacao_requirement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub edital_id: i32,
    pub requirement_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub document_type: Option<DocumentType>,
    pub is_mandatory: bool,
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

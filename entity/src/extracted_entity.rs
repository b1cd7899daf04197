use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "extracted_entity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub edital_id: i32,
    pub entity_type: String,
    #[sea_orm(column_type = "Text")]
    pub entity_value: String,
    pub confidence: f64,
    pub start_position: i32,
    pub end_position: i32,
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

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub razao_social: String,
    pub nome_fantasia: Option<String>,
    #[sea_orm(unique)]
    pub cnpj: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document::Entity")]
    Document,
    #[sea_orm(has_many = "super::edital::Entity")]
    Edital,
    #[sea_orm(has_one = "super::subscription::Entity")]
    Subscription,
    #[sea_orm(has_many = "super::user::Entity")]
    User,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl Related<super::edital::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Edital.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

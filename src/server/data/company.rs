use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::company::NewCompany;

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, company: NewCompany) -> Result<entity::company::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Company::insert(entity::company::ActiveModel {
            razao_social: ActiveValue::Set(company.razao_social),
            nome_fantasia: ActiveValue::Set(company.nome_fantasia),
            cnpj: ActiveValue::Set(company.cnpj),
            endereco: ActiveValue::Set(company.endereco),
            telefone: ActiveValue::Set(company.telefone),
            email: ActiveValue::Set(company.email),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::Cnpj.eq(cnpj))
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Company::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

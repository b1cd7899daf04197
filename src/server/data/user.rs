use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        company_id: i32,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::User::insert(entity::user::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            email: ActiveValue::Set(email.to_string()),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .all(self.db)
            .await
    }

    pub async fn delete_by_company(&self, company_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

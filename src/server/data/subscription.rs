use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use entity::subscription::SubscriptionStatus;

/// Initial subscription period granted at registration, in days.
pub const INITIAL_PERIOD_DAYS: i64 = 30;

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create the ACTIVE subscription a company receives at registration.
    pub async fn create_initial(
        &self,
        company_id: i32,
    ) -> Result<entity::subscription::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let today = now.date();

        entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            status: ActiveValue::Set(SubscriptionStatus::Active),
            current_period_start: ActiveValue::Set(today),
            current_period_end: ActiveValue::Set(today + Duration::days(INITIAL_PERIOD_DAYS)),
            analyses_used: ActiveValue::Set(0),
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
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    pub async fn delete_by_company(&self, company_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Subscription::delete_many()
            .filter(entity::subscription::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

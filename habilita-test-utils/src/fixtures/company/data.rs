//! Company graph insertion utilities.
//!
//! Methods for inserting company, user, and subscription records into the test
//! database with standard test values.

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use entity::subscription::SubscriptionStatus;

use crate::{
    constant::TEST_EMAIL,
    error::TestError,
    model::{CompanyModel, SubscriptionModel, UserModel},
    TestSetup,
};

impl TestSetup {
    /// Insert a mock company into the database.
    ///
    /// # Arguments
    /// - `cnpj` - Tax identifier for the company; must be unique per test database
    ///
    /// # Returns
    /// - `Ok(CompanyModel)` - The created company record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_mock_company(&self, cnpj: &str) -> Result<CompanyModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Company::insert(entity::company::ActiveModel {
            razao_social: ActiveValue::Set("Construtora Horizonte LTDA".to_string()),
            nome_fantasia: ActiveValue::Set(Some("Horizonte".to_string())),
            cnpj: ActiveValue::Set(cnpj.to_string()),
            endereco: ActiveValue::Set(Some("Av. Paulista, 1000 - São Paulo/SP".to_string())),
            telefone: ActiveValue::Set(Some("(11) 4002-8922".to_string())),
            email: ActiveValue::Set(Some(TEST_EMAIL.to_string())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert a mock user belonging to a company.
    pub async fn insert_mock_user(
        &self,
        company_id: i32,
        email: &str,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            email: ActiveValue::Set(email.to_string()),
            first_name: ActiveValue::Set("Maria".to_string()),
            last_name: ActiveValue::Set("Silva".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?)
    }

    /// Insert an active 30-day subscription for a company.
    pub async fn insert_mock_subscription(
        &self,
        company_id: i32,
    ) -> Result<SubscriptionModel, TestError> {
        let now = Utc::now().naive_utc();
        let today = now.date();

        Ok(
            entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
                company_id: ActiveValue::Set(company_id),
                status: ActiveValue::Set(SubscriptionStatus::Active),
                current_period_start: ActiveValue::Set(today),
                current_period_end: ActiveValue::Set(today + Duration::days(30)),
                analyses_used: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.db)
            .await?,
        )
    }
}

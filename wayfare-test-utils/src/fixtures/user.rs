use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{error::TestError, setup::TestSetup};

/// Insert helpers for users and bookings.
pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestSetup {
    pub fn users(&self) -> UserFixtures<'_> {
        UserFixtures { db: &self.db }
    }
}

impl UserFixtures<'_> {
    pub async fn insert_user_type(
        &self,
        name: &str,
        admin: bool,
        manager: bool,
    ) -> Result<entity::user_type::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::user_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            admin: ActiveValue::Set(admin),
            manager: ActiveValue::Set(manager),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        user_type_id: i32,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            user_type_id: ActiveValue::Set(user_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_booking(
        &self,
        user_id: i32,
        tour_id: i32,
    ) -> Result<entity::user_tour::Model, TestError> {
        let model = entity::user_tour::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            tour_id: ActiveValue::Set(tour_id),
            booked_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }
}

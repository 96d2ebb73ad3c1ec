use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{error::TestError, setup::TestSetup};

/// Insert helpers for tours and their reference data.
pub struct TravelFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TestSetup {
    pub fn travel(&self) -> TravelFixtures<'_> {
        TravelFixtures { db: &self.db }
    }
}

impl TravelFixtures<'_> {
    pub async fn insert_tour_type(&self, name: &str) -> Result<entity::tour_type::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::tour_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_transport_type(
        &self,
        name: &str,
    ) -> Result<entity::transport_type::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::transport_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_meal_type(&self, name: &str) -> Result<entity::meal_type::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::meal_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_location_type(
        &self,
        name: &str,
    ) -> Result<entity::location_type::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::location_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_location(
        &self,
        name: &str,
        country: &str,
        location_type_id: i32,
    ) -> Result<entity::location::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::location::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            country: ActiveValue::Set(country.to_string()),
            description: ActiveValue::Set(None),
            location_type_id: ActiveValue::Set(location_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_meal(
        &self,
        name: &str,
        meals_per_day: i32,
        cost_per_day: f64,
    ) -> Result<entity::meal::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::meal::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            meals_per_day: ActiveValue::Set(meals_per_day),
            cost_per_day: ActiveValue::Set(cost_per_day),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_transport(
        &self,
        name: &str,
        price_per_person: f64,
        transport_type_id: i32,
    ) -> Result<entity::transport::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::transport::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            price_per_person: ActiveValue::Set(price_per_person),
            transport_type_id: ActiveValue::Set(transport_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    /// Active tour with no transport, meal, or dates attached.
    pub async fn insert_tour(
        &self,
        description: &str,
        tour_type_id: i32,
        price: f64,
    ) -> Result<entity::tour::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::tour::ActiveModel {
            description: ActiveValue::Set(description.to_string()),
            tour_type_id: ActiveValue::Set(tour_type_id),
            transport_id: ActiveValue::Set(None),
            meal_id: ActiveValue::Set(None),
            start_date: ActiveValue::Set(None),
            end_date: ActiveValue::Set(None),
            price: ActiveValue::Set(price),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn insert_dated_tour(
        &self,
        description: &str,
        tour_type_id: i32,
        price: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<entity::tour::Model, TestError> {
        let now = Utc::now().naive_utc();
        let model = entity::tour::ActiveModel {
            description: ActiveValue::Set(description.to_string()),
            tour_type_id: ActiveValue::Set(tour_type_id),
            transport_id: ActiveValue::Set(None),
            meal_id: ActiveValue::Set(None),
            start_date: ActiveValue::Set(Some(start_date)),
            end_date: ActiveValue::Set(Some(end_date)),
            price: ActiveValue::Set(price),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn link_tour_location(
        &self,
        tour_id: i32,
        location_id: i32,
    ) -> Result<entity::tour_location::Model, TestError> {
        let model = entity::tour_location::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            location_id: ActiveValue::Set(location_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }

    pub async fn link_meal_meal_type(
        &self,
        meal_id: i32,
        meal_type_id: i32,
    ) -> Result<entity::meal_meal_type::Model, TestError> {
        let model = entity::meal_meal_type::ActiveModel {
            meal_id: ActiveValue::Set(meal_id),
            meal_type_id: ActiveValue::Set(meal_type_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model)
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::db::{BookingModel, TourModel, UserModel};

/// Bookings are tour-user links with a booking timestamp.
pub struct UserTourRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserTourRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn book(&self, user_id: i32, tour_id: i32) -> Result<BookingModel, DbErr> {
        entity::user_tour::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            tour_id: ActiveValue::Set(tour_id),
            booked_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn cancel(&self, user_id: i32, tour_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserTour::delete_many()
            .filter(entity::user_tour::Column::UserId.eq(user_id))
            .filter(entity::user_tour::Column::TourId.eq(tour_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_booked(&self, user_id: i32, tour_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserTour::find()
            .filter(entity::user_tour::Column::UserId.eq(user_id))
            .filter(entity::user_tour::Column::TourId.eq(tour_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn tours_for_user(&self, user_id: i32) -> Result<Vec<TourModel>, DbErr> {
        let rows = entity::prelude::UserTour::find()
            .filter(entity::user_tour::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Tour)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, tour)| tour).collect())
    }

    pub async fn users_for_tour(&self, tour_id: i32) -> Result<Vec<UserModel>, DbErr> {
        let rows = entity::prelude::UserTour::find()
            .filter(entity::user_tour::Column::TourId.eq(tour_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, user)| user).collect())
    }

    pub async fn bookings_for_user(&self, user_id: i32) -> Result<Vec<BookingModel>, DbErr> {
        entity::prelude::UserTour::find()
            .filter(entity::user_tour::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    pub async fn cancel_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserTour::delete_many()
            .filter(entity::user_tour::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn cancel_all_for_tour(&self, tour_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserTour::delete_many()
            .filter(entity::user_tour::Column::TourId.eq(tour_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn all_links(&self) -> Result<Vec<BookingModel>, DbErr> {
        entity::prelude::UserTour::find().all(self.db).await
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::db::{LocationModel, TourLocationModel, TourModel};

pub struct TourLocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TourLocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn link(&self, tour_id: i32, location_id: i32) -> Result<TourLocationModel, DbErr> {
        entity::tour_location::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            location_id: ActiveValue::Set(location_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn unlink(&self, tour_id: i32, location_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TourLocation::delete_many()
            .filter(entity::tour_location::Column::TourId.eq(tour_id))
            .filter(entity::tour_location::Column::LocationId.eq(location_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn unlink_all_for_tour(&self, tour_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TourLocation::delete_many()
            .filter(entity::tour_location::Column::TourId.eq(tour_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn is_linked(&self, tour_id: i32, location_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TourLocation::find()
            .filter(entity::tour_location::Column::TourId.eq(tour_id))
            .filter(entity::tour_location::Column::LocationId.eq(location_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn locations_for_tour(&self, tour_id: i32) -> Result<Vec<LocationModel>, DbErr> {
        let rows = entity::prelude::TourLocation::find()
            .filter(entity::tour_location::Column::TourId.eq(tour_id))
            .find_also_related(entity::prelude::Location)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, location)| location).collect())
    }

    pub async fn tours_for_location(&self, location_id: i32) -> Result<Vec<TourModel>, DbErr> {
        let rows = entity::prelude::TourLocation::find()
            .filter(entity::tour_location::Column::LocationId.eq(location_id))
            .find_also_related(entity::prelude::Tour)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, tour)| tour).collect())
    }

    pub async fn all_links(&self) -> Result<Vec<TourLocationModel>, DbErr> {
        entity::prelude::TourLocation::find().all(self.db).await
    }

    /// Replaces the tour's location set with exactly `location_ids`.
    ///
    /// Not atomic on a plain connection; run on a transaction when a partial
    /// replacement must not survive.
    pub async fn replace_for_tour(&self, tour_id: i32, location_ids: &[i32]) -> Result<(), DbErr> {
        self.unlink_all_for_tour(tour_id).await?;

        for location_id in location_ids {
            self.link(tour_id, *location_id).await?;
        }

        Ok(())
    }
}

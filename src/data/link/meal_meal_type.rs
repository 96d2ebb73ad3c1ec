use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::db::{MealMealTypeModel, MealModel, MealTypeModel};

pub struct MealMealTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MealMealTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn link(&self, meal_id: i32, meal_type_id: i32) -> Result<MealMealTypeModel, DbErr> {
        entity::meal_meal_type::ActiveModel {
            meal_id: ActiveValue::Set(meal_id),
            meal_type_id: ActiveValue::Set(meal_type_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn unlink(&self, meal_id: i32, meal_type_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MealMealType::delete_many()
            .filter(entity::meal_meal_type::Column::MealId.eq(meal_id))
            .filter(entity::meal_meal_type::Column::MealTypeId.eq(meal_type_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn unlink_all_for_meal(&self, meal_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MealMealType::delete_many()
            .filter(entity::meal_meal_type::Column::MealId.eq(meal_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn is_linked(&self, meal_id: i32, meal_type_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MealMealType::find()
            .filter(entity::meal_meal_type::Column::MealId.eq(meal_id))
            .filter(entity::meal_meal_type::Column::MealTypeId.eq(meal_type_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn meal_types_for_meal(&self, meal_id: i32) -> Result<Vec<MealTypeModel>, DbErr> {
        let rows = entity::prelude::MealMealType::find()
            .filter(entity::meal_meal_type::Column::MealId.eq(meal_id))
            .find_also_related(entity::prelude::MealType)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, meal_type)| meal_type).collect())
    }

    pub async fn meals_for_meal_type(&self, meal_type_id: i32) -> Result<Vec<MealModel>, DbErr> {
        let rows = entity::prelude::MealMealType::find()
            .filter(entity::meal_meal_type::Column::MealTypeId.eq(meal_type_id))
            .find_also_related(entity::prelude::Meal)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, meal)| meal).collect())
    }

    pub async fn all_links(&self) -> Result<Vec<MealMealTypeModel>, DbErr> {
        entity::prelude::MealMealType::find().all(self.db).await
    }

    /// Replaces the meal's type set with exactly `meal_type_ids`.
    pub async fn replace_for_meal(&self, meal_id: i32, meal_type_ids: &[i32]) -> Result<(), DbErr> {
        self.unlink_all_for_meal(meal_id).await?;

        for meal_type_id in meal_type_ids {
            self.link(meal_id, *meal_type_id).await?;
        }

        Ok(())
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    JoinType, QuerySelect, RelationTrait, Select, Set,
};

use crate::{
    data::{
        filter::FilterSet,
        link::MealMealTypeRepository,
        search::{self, Searchable},
    },
    model::{
        db::MealModel,
        meal::{MealDetails, MealDraft},
    },
};

pub struct MealRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MealRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the draft's scalar fields; meal type links are the caller's job.
    pub async fn create(&self, draft: &MealDraft) -> Result<MealModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::meal::ActiveModel {
            name: Set(draft.name.clone()),
            meals_per_day: Set(draft.meals_per_day),
            cost_per_day: Set(draft.cost_per_day),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(&self, id: i32, draft: &MealDraft) -> Result<Option<MealModel>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = Set(draft.name.clone());
        active.meals_per_day = Set(draft.meals_per_day);
        active.cost_per_day = Set(draft.cost_per_day);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Meal::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get(&self, id: i32) -> Result<Option<MealModel>, DbErr> {
        entity::prelude::Meal::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<MealModel>, DbErr> {
        entity::prelude::Meal::find().all(self.db).await
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<MealModel>, DbErr> {
        search::search::<entity::prelude::Meal, _>(self.db, filters).await
    }

    pub async fn get_with_details(&self, id: i32) -> Result<Option<MealDetails>, DbErr> {
        let Some(meal) = self.get(id).await? else {
            return Ok(None);
        };

        let meal_types = MealMealTypeRepository::new(self.db)
            .meal_types_for_meal(meal.id)
            .await?;

        Ok(Some(MealDetails { meal, meal_types }))
    }
}

impl Searchable for entity::meal::Entity {
    fn join_related(select: Select<Self>) -> Select<Self> {
        select.join(
            JoinType::LeftJoin,
            entity::meal::Relation::MealMealTypes.def(),
        )
    }

    fn filter_column(key: &str) -> Option<Expr> {
        let column = match key {
            "name" => Expr::col((entity::prelude::Meal, entity::meal::Column::Name)),
            "meals_per_day" => {
                Expr::col((entity::prelude::Meal, entity::meal::Column::MealsPerDay))
            }
            "min_price" | "max_price" => {
                Expr::col((entity::prelude::Meal, entity::meal::Column::CostPerDay))
            }
            "meal_types" => Expr::col((
                entity::prelude::MealMealType,
                entity::meal_meal_type::Column::MealTypeId,
            )),
            _ => return None,
        };

        Some(column)
    }
}

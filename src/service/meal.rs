use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{filter::FilterSet, link::MealMealTypeRepository, meal::MealRepository},
    error::{Error, ValidationError},
    model::{
        db::MealModel,
        meal::{MealDetails, MealDraft},
    },
};

pub struct MealService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MealService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn validate(draft: &MealDraft) -> Result<(), ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if draft.meals_per_day < 1 {
            return Err(ValidationError::InvalidMealsPerDay(draft.meals_per_day));
        }
        if draft.cost_per_day < 0.0 {
            return Err(ValidationError::NegativePrice(draft.cost_per_day));
        }

        Ok(())
    }

    /// Creates a meal and links its meal types in one transaction.
    pub async fn create(&self, draft: &MealDraft) -> Result<MealModel, Error> {
        Self::validate(draft)?;

        let txn = self.db.begin().await?;

        let meal = MealRepository::new(&txn).create(draft).await?;
        if let Some(meal_type_ids) = &draft.meal_type_ids {
            MealMealTypeRepository::new(&txn)
                .replace_for_meal(meal.id, meal_type_ids)
                .await?;
        }

        txn.commit().await?;

        Ok(meal)
    }

    /// Updates a meal and replaces its meal type set atomically.
    pub async fn update(&self, id: i32, draft: &MealDraft) -> Result<MealModel, Error> {
        Self::validate(draft)?;

        let txn = self.db.begin().await?;

        let Some(meal) = MealRepository::new(&txn).update(id, draft).await? else {
            return Err(Error::NotFound { entity: "meal", id });
        };
        let meal_type_ids = draft.meal_type_ids.as_deref().unwrap_or(&[]);
        MealMealTypeRepository::new(&txn)
            .replace_for_meal(id, meal_type_ids)
            .await?;

        txn.commit().await?;

        Ok(meal)
    }

    /// Deletes a meal along with its meal type links. Tours that referenced
    /// the meal keep running; their `meal_id` must be detached first by the
    /// caller or the database will refuse.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        MealMealTypeRepository::new(&txn)
            .unlink_all_for_meal(id)
            .await?;
        if !MealRepository::new(&txn).delete(id).await? {
            return Err(Error::NotFound { entity: "meal", id });
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<MealModel, Error> {
        MealRepository::new(self.db)
            .get(id)
            .await?
            .ok_or(Error::NotFound { entity: "meal", id })
    }

    pub async fn get_details(&self, id: i32) -> Result<MealDetails, Error> {
        MealRepository::new(self.db)
            .get_with_details(id)
            .await?
            .ok_or(Error::NotFound { entity: "meal", id })
    }

    pub async fn get_all(&self) -> Result<Vec<MealModel>, Error> {
        Ok(MealRepository::new(self.db).get_all().await?)
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<MealModel>, Error> {
        Ok(MealRepository::new(self.db).search(filters).await?)
    }
}

#[cfg(test)]
mod tests {
    use wayfare_test_utils::prelude::*;

    use super::*;
    use crate::error::ValidationError;

    fn draft(name: &str, meals_per_day: i32, cost_per_day: f64) -> MealDraft {
        MealDraft {
            name: name.to_string(),
            meals_per_day,
            cost_per_day,
            meal_type_ids: None,
        }
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn rejects_zero_meals_per_day() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = MealService::new(&test.db);

            let result = service.create(&draft("Full board", 0, 45.0)).await;

            assert!(matches!(
                result,
                Err(Error::Validation(ValidationError::InvalidMealsPerDay(0)))
            ));
            Ok(())
        }

        #[tokio::test]
        async fn links_meal_types_from_the_draft() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = MealService::new(&test.db);

            let vegetarian = test.travel().insert_meal_type("Vegetarian").await?;
            let mut with_types = draft("Full board", 3, 45.0);
            with_types.meal_type_ids = Some(vec![vegetarian.id]);

            let meal = service.create(&with_types).await.unwrap();

            let details = service.get_details(meal.id).await.unwrap();
            assert_eq!(details.meal_types.len(), 1);
            assert_eq!(details.meal_types[0].name, "Vegetarian");
            Ok(())
        }

        #[tokio::test]
        async fn unknown_meal_type_rolls_back_the_meal() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = MealService::new(&test.db);

            let mut with_bad_type = draft("Full board", 3, 45.0);
            with_bad_type.meal_type_ids = Some(vec![404]);

            let result = service.create(&with_bad_type).await;

            assert!(matches!(result, Err(Error::Db(_))));
            assert!(service.get_all().await.unwrap().is_empty());
            Ok(())
        }
    }

    mod update {
        use super::*;

        #[tokio::test]
        async fn replaces_meal_type_set() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = MealService::new(&test.db);

            let meal = test.travel().insert_meal("Full board", 3, 45.0).await?;
            let vegetarian = test.travel().insert_meal_type("Vegetarian").await?;
            let vegan = test.travel().insert_meal_type("Vegan").await?;
            test.travel().link_meal_meal_type(meal.id, vegetarian.id).await?;

            let mut changed = draft("Full board", 3, 45.0);
            changed.meal_type_ids = Some(vec![vegan.id]);
            service.update(meal.id, &changed).await.unwrap();

            let details = service.get_details(meal.id).await.unwrap();
            assert_eq!(details.meal_types.len(), 1);
            assert_eq!(details.meal_types[0].name, "Vegan");
            Ok(())
        }

        #[tokio::test]
        async fn missing_meal_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = MealService::new(&test.db);

            let result = service.update(404, &draft("Ghost", 1, 1.0)).await;

            assert!(matches!(
                result,
                Err(Error::NotFound { entity: "meal", id: 404 })
            ));
            Ok(())
        }
    }

    mod delete {
        use super::*;

        #[tokio::test]
        async fn removes_meal_and_its_type_links() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = MealService::new(&test.db);

            let meal = test.travel().insert_meal("Full board", 3, 45.0).await?;
            let vegetarian = test.travel().insert_meal_type("Vegetarian").await?;
            test.travel().link_meal_meal_type(meal.id, vegetarian.id).await?;

            service.delete(meal.id).await.unwrap();

            assert!(matches!(
                service.get(meal.id).await,
                Err(Error::NotFound { .. })
            ));
            Ok(())
        }
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Set,
};

use crate::{
    data::{
        filter::FilterSet,
        search::{self, Searchable},
    },
    model::{db::LocationModel, location::LocationDraft},
};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, draft: &LocationDraft) -> Result<LocationModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::location::ActiveModel {
            name: Set(draft.name.clone()),
            country: Set(draft.country.clone()),
            description: Set(draft.description.clone()),
            location_type_id: Set(draft.location_type_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        draft: &LocationDraft,
    ) -> Result<Option<LocationModel>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = Set(draft.name.clone());
        active.country = Set(draft.country.clone());
        active.description = Set(draft.description.clone());
        active.location_type_id = Set(draft.location_type_id);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Location::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get(&self, id: i32) -> Result<Option<LocationModel>, DbErr> {
        entity::prelude::Location::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<LocationModel>, DbErr> {
        entity::prelude::Location::find().all(self.db).await
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<LocationModel>, DbErr> {
        search::search::<entity::prelude::Location, _>(self.db, filters).await
    }
}

impl Searchable for entity::location::Entity {
    fn filter_column(key: &str) -> Option<Expr> {
        let column = match key {
            "name" => Expr::col((entity::prelude::Location, entity::location::Column::Name)),
            "country" => Expr::col((entity::prelude::Location, entity::location::Column::Country)),
            "keyword" => Expr::col((
                entity::prelude::Location,
                entity::location::Column::Description,
            )),
            "location_type" => Expr::col((
                entity::prelude::Location,
                entity::location::Column::LocationTypeId,
            )),
            _ => return None,
        };

        Some(column)
    }
}

#[cfg(test)]
mod tests {
    use wayfare_test_utils::prelude::*;

    use super::*;
    use crate::data::filter::Criterion;

    fn draft(name: &str, country: &str, location_type_id: i32) -> LocationDraft {
        LocationDraft {
            name: name.to_string(),
            country: country.to_string(),
            description: None,
            location_type_id,
        }
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn persists_draft_fields() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = LocationRepository::new(&test.db);

            let location_type = test.travel().insert_location_type("City").await?;
            let created = repository
                .create(&draft("Lisbon", "Portugal", location_type.id))
                .await?;

            assert_eq!(created.name, "Lisbon");
            assert_eq!(created.country, "Portugal");
            assert!(created.description.is_none());
            Ok(())
        }
    }

    mod update {
        use super::*;

        #[tokio::test]
        async fn overwrites_fields() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = LocationRepository::new(&test.db);

            let location_type = test.travel().insert_location_type("City").await?;
            let location = test
                .travel()
                .insert_location("Lisboa", "Portugal", location_type.id)
                .await?;

            let mut changed = draft("Lisbon", "Portugal", location_type.id);
            changed.description = Some("Hilly coastal capital".to_string());
            let updated = repository.update(location.id, &changed).await?.unwrap();

            assert_eq!(updated.name, "Lisbon");
            assert_eq!(
                updated.description,
                Some("Hilly coastal capital".to_string())
            );
            Ok(())
        }

        #[tokio::test]
        async fn returns_none_for_missing_id() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = LocationRepository::new(&test.db);

            assert!(repository.update(404, &draft("X", "Y", 1)).await?.is_none());
            Ok(())
        }
    }

    mod search {
        use super::*;

        #[tokio::test]
        async fn filters_by_country_and_type() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = LocationRepository::new(&test.db);

            let city = test.travel().insert_location_type("City").await?;
            let mountain = test.travel().insert_location_type("Mountain").await?;
            test.travel().insert_location("Lisbon", "Portugal", city.id).await?;
            test.travel().insert_location("Porto", "Portugal", city.id).await?;
            test.travel()
                .insert_location("Serra da Estrela", "Portugal", mountain.id)
                .await?;

            let filters = FilterSet::new()
                .with("country", Criterion::Equals("Portugal".into()))
                .with("location_type", Criterion::Equals(city.id.into()));
            let found = repository.search(&filters).await?;

            assert_eq!(found.len(), 2);
            Ok(())
        }

        #[tokio::test]
        async fn name_contains_is_case_insensitive() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let repository = LocationRepository::new(&test.db);

            let city = test.travel().insert_location_type("City").await?;
            test.travel().insert_location("Lisbon", "Portugal", city.id).await?;
            test.travel().insert_location("Madrid", "Spain", city.id).await?;

            let filters = FilterSet::new().with("name", Criterion::Contains("LIS".to_string()));
            let found = repository.search(&filters).await?;

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].name, "Lisbon");
            Ok(())
        }
    }
}

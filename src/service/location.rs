use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{filter::FilterSet, link::TourLocationRepository, location::LocationRepository},
    error::{Error, ValidationError},
    model::{db::LocationModel, location::LocationDraft},
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn validate(draft: &LocationDraft) -> Result<(), ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if draft.country.trim().is_empty() {
            return Err(ValidationError::MissingField("country"));
        }

        Ok(())
    }

    pub async fn create(&self, draft: &LocationDraft) -> Result<LocationModel, Error> {
        Self::validate(draft)?;

        Ok(LocationRepository::new(self.db).create(draft).await?)
    }

    pub async fn update(&self, id: i32, draft: &LocationDraft) -> Result<LocationModel, Error> {
        Self::validate(draft)?;

        LocationRepository::new(self.db)
            .update(id, draft)
            .await?
            .ok_or(Error::NotFound {
                entity: "location",
                id,
            })
    }

    /// Deletes a location after detaching it from every tour.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let links = TourLocationRepository::new(&txn);
        for tour in links.tours_for_location(id).await? {
            links.unlink(tour.id, id).await?;
        }
        if !LocationRepository::new(&txn).delete(id).await? {
            return Err(Error::NotFound {
                entity: "location",
                id,
            });
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<LocationModel, Error> {
        LocationRepository::new(self.db)
            .get(id)
            .await?
            .ok_or(Error::NotFound {
                entity: "location",
                id,
            })
    }

    pub async fn get_all(&self) -> Result<Vec<LocationModel>, Error> {
        Ok(LocationRepository::new(self.db).get_all().await?)
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<LocationModel>, Error> {
        Ok(LocationRepository::new(self.db).search(filters).await?)
    }
}

#[cfg(test)]
mod tests {
    use wayfare_test_utils::prelude::*;

    use super::*;
    use crate::error::ValidationError;

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
        async fn rejects_blank_country() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = LocationService::new(&test.db);

            let result = service.create(&draft("Lisbon", " ", 1)).await;

            assert!(matches!(
                result,
                Err(Error::Validation(ValidationError::MissingField("country")))
            ));
            Ok(())
        }

        #[tokio::test]
        async fn persists_valid_draft() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = LocationService::new(&test.db);

            let location_type = test.travel().insert_location_type("City").await?;
            let created = service
                .create(&draft("Lisbon", "Portugal", location_type.id))
                .await
                .unwrap();

            assert_eq!(created.name, "Lisbon");
            Ok(())
        }
    }

    mod delete {
        use super::*;

        #[tokio::test]
        async fn detaches_location_from_tours_first() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = LocationService::new(&test.db);

            let tour_type = test.travel().insert_tour_type("Hiking").await?;
            let tour = test.travel().insert_tour("Alps trek", tour_type.id, 900.0).await?;
            let location_type = test.travel().insert_location_type("Mountain").await?;
            let zermatt = test
                .travel()
                .insert_location("Zermatt", "Switzerland", location_type.id)
                .await?;
            test.travel().link_tour_location(tour.id, zermatt.id).await?;

            service.delete(zermatt.id).await.unwrap();

            assert!(matches!(
                service.get(zermatt.id).await,
                Err(Error::NotFound { .. })
            ));
            let links = TourLocationRepository::new(&test.db);
            assert!(links.locations_for_tour(tour.id).await?.is_empty());
            Ok(())
        }

        #[tokio::test]
        async fn missing_location_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = LocationService::new(&test.db);

            assert!(matches!(
                service.delete(404).await,
                Err(Error::NotFound { entity: "location", id: 404 })
            ));
            Ok(())
        }
    }
}

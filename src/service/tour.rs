use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        filter::FilterSet,
        link::{TourLocationRepository, UserTourRepository},
        tour::TourRepository,
    },
    error::{Error, ValidationError},
    model::{
        db::TourModel,
        tour::{TourDetails, TourDraft},
    },
};

pub struct TourService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TourService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn validate(draft: &TourDraft) -> Result<(), ValidationError> {
        if draft.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        if draft.price < 0.0 {
            return Err(ValidationError::NegativePrice(draft.price));
        }
        if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
            if start > end {
                return Err(ValidationError::InvalidDateRange { start, end });
            }
        }

        Ok(())
    }

    /// Creates a tour and links its locations in one transaction.
    pub async fn create(&self, draft: &TourDraft) -> Result<TourModel, Error> {
        Self::validate(draft)?;

        let txn = self.db.begin().await?;

        let tour = TourRepository::new(&txn).create(draft).await?;
        if let Some(location_ids) = &draft.location_ids {
            TourLocationRepository::new(&txn)
                .replace_for_tour(tour.id, location_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(tour_id = tour.id, "created tour");

        Ok(tour)
    }

    /// Updates a tour's fields and replaces its location set atomically.
    ///
    /// The previous location links never mix with the new ones: either the
    /// whole replacement lands or the tour is left untouched.
    pub async fn update(&self, id: i32, draft: &TourDraft) -> Result<TourModel, Error> {
        Self::validate(draft)?;

        let txn = self.db.begin().await?;

        let Some(tour) = TourRepository::new(&txn).update(id, draft).await? else {
            return Err(Error::NotFound { entity: "tour", id });
        };
        let location_ids = draft.location_ids.as_deref().unwrap_or(&[]);
        TourLocationRepository::new(&txn)
            .replace_for_tour(id, location_ids)
            .await?;

        txn.commit().await?;

        Ok(tour)
    }

    /// Deletes a tour along with its location links and bookings.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        TourLocationRepository::new(&txn)
            .unlink_all_for_tour(id)
            .await?;
        UserTourRepository::new(&txn).cancel_all_for_tour(id).await?;
        if !TourRepository::new(&txn).delete(id).await? {
            return Err(Error::NotFound { entity: "tour", id });
        }

        txn.commit().await?;

        tracing::info!(tour_id = id, "deleted tour");

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<TourModel, Error> {
        TourRepository::new(self.db)
            .get(id)
            .await?
            .ok_or(Error::NotFound { entity: "tour", id })
    }

    pub async fn get_details(&self, id: i32) -> Result<TourDetails, Error> {
        TourRepository::new(self.db)
            .get_with_details(id)
            .await?
            .ok_or(Error::NotFound { entity: "tour", id })
    }

    pub async fn get_all(&self) -> Result<Vec<TourModel>, Error> {
        Ok(TourRepository::new(self.db).get_all().await?)
    }

    pub async fn search(&self, filters: &FilterSet) -> Result<Vec<TourModel>, Error> {
        Ok(TourRepository::new(self.db).search(filters).await?)
    }
}

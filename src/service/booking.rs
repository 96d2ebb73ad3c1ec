use sea_orm::DatabaseConnection;

use crate::{
    data::{link::UserTourRepository, tour::TourRepository, user::UserRepository},
    error::{conflict, ConflictError, Error, ValidationError},
    model::db::{BookingModel, TourModel, UserModel},
};

/// Booking rules: a user books an active tour at most once.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn book(&self, user_id: i32, tour_id: i32) -> Result<BookingModel, Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(Error::NotFound {
                entity: "user",
                id: user_id,
            });
        }
        let Some(tour) = TourRepository::new(self.db).get(tour_id).await? else {
            return Err(Error::NotFound {
                entity: "tour",
                id: tour_id,
            });
        };
        if !tour.active {
            return Err(ValidationError::TourNotBookable(tour_id).into());
        }

        let bookings = UserTourRepository::new(self.db);
        if bookings.is_booked(user_id, tour_id).await? {
            return Err(ConflictError::DuplicateBooking { user_id, tour_id }.into());
        }

        let booking = bookings.book(user_id, tour_id).await.map_err(|err| {
            conflict::unique_violation(err, ConflictError::DuplicateBooking { user_id, tour_id })
        })?;

        tracing::info!(user_id, tour_id, "booked tour");

        Ok(booking)
    }

    pub async fn cancel(&self, user_id: i32, tour_id: i32) -> Result<(), Error> {
        if !UserTourRepository::new(self.db).cancel(user_id, tour_id).await? {
            return Err(Error::NotFound {
                entity: "booking",
                id: tour_id,
            });
        }

        tracing::info!(user_id, tour_id, "cancelled booking");

        Ok(())
    }

    pub async fn tours_for_user(&self, user_id: i32) -> Result<Vec<TourModel>, Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(Error::NotFound {
                entity: "user",
                id: user_id,
            });
        }

        Ok(UserTourRepository::new(self.db).tours_for_user(user_id).await?)
    }

    pub async fn users_for_tour(&self, tour_id: i32) -> Result<Vec<UserModel>, Error> {
        if TourRepository::new(self.db).get(tour_id).await?.is_none() {
            return Err(Error::NotFound {
                entity: "tour",
                id: tour_id,
            });
        }

        Ok(UserTourRepository::new(self.db).users_for_tour(tour_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, ActiveValue};
    use wayfare_test_utils::prelude::*;

    use super::*;
    use crate::error::{ConflictError, ValidationError};

    async fn booking_fixture(
        test: &TestSetup,
    ) -> Result<(entity::user::Model, entity::tour::Model), TestError> {
        let user_type = test.users().insert_user_type("Customer", false, false).await?;
        let user = test
            .users()
            .insert_user("Ada", "ada@example.com", user_type.id)
            .await?;
        let tour_type = test.travel().insert_tour_type("Hiking").await?;
        let tour = test.travel().insert_tour("Alps trek", tour_type.id, 900.0).await?;

        Ok((user, tour))
    }

    mod book {
        use super::*;

        #[tokio::test]
        async fn books_active_tour() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);
            let (user, tour) = booking_fixture(&test).await?;

            let booking = service.book(user.id, tour.id).await.unwrap();

            assert_eq!(booking.user_id, user.id);
            assert_eq!(booking.tour_id, tour.id);
            Ok(())
        }

        /// Expect DuplicateBooking when the same user books twice
        #[tokio::test]
        async fn second_booking_is_a_structured_conflict() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);
            let (user, tour) = booking_fixture(&test).await?;

            service.book(user.id, tour.id).await.unwrap();
            let result = service.book(user.id, tour.id).await;

            assert!(matches!(
                result,
                Err(Error::Conflict(ConflictError::DuplicateBooking { user_id, tour_id }))
                    if user_id == user.id && tour_id == tour.id
            ));
            Ok(())
        }

        #[tokio::test]
        async fn inactive_tour_is_not_bookable() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);
            let (user, tour) = booking_fixture(&test).await?;

            let mut active: entity::tour::ActiveModel = tour.clone().into();
            active.active = ActiveValue::Set(false);
            active.update(&test.db).await?;

            let result = service.book(user.id, tour.id).await;

            assert!(matches!(
                result,
                Err(Error::Validation(ValidationError::TourNotBookable(id))) if id == tour.id
            ));
            Ok(())
        }

        #[tokio::test]
        async fn unknown_user_or_tour_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);
            let (user, tour) = booking_fixture(&test).await?;

            assert!(matches!(
                service.book(404, tour.id).await,
                Err(Error::NotFound { entity: "user", id: 404 })
            ));
            assert!(matches!(
                service.book(user.id, 404).await,
                Err(Error::NotFound { entity: "tour", id: 404 })
            ));
            Ok(())
        }
    }

    mod cancel {
        use super::*;

        #[tokio::test]
        async fn removes_existing_booking() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);
            let (user, tour) = booking_fixture(&test).await?;
            test.users().insert_booking(user.id, tour.id).await?;

            service.cancel(user.id, tour.id).await.unwrap();

            assert!(service.tours_for_user(user.id).await.unwrap().is_empty());
            Ok(())
        }

        #[tokio::test]
        async fn missing_booking_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);
            let (user, tour) = booking_fixture(&test).await?;

            assert!(matches!(
                service.cancel(user.id, tour.id).await,
                Err(Error::NotFound { entity: "booking", .. })
            ));
            Ok(())
        }
    }

    mod listings {
        use super::*;

        #[tokio::test]
        async fn lists_both_sides_of_a_booking() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);
            let (user, tour) = booking_fixture(&test).await?;
            test.users().insert_booking(user.id, tour.id).await?;

            let tours = service.tours_for_user(user.id).await.unwrap();
            let users = service.users_for_tour(tour.id).await.unwrap();

            assert_eq!(tours.len(), 1);
            assert_eq!(users.len(), 1);
            assert_eq!(users[0].email, "ada@example.com");
            Ok(())
        }

        #[tokio::test]
        async fn unknown_owner_is_not_found() -> Result<(), TestError> {
            let test = test_setup_with_travel_tables!()?;
            let service = BookingService::new(&test.db);

            assert!(matches!(
                service.tours_for_user(404).await,
                Err(Error::NotFound { entity: "user", id: 404 })
            ));
            assert!(matches!(
                service.users_for_tour(404).await,
                Err(Error::NotFound { entity: "tour", id: 404 })
            ));
            Ok(())
        }
    }
}

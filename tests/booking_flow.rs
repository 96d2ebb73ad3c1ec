//! Full walk through the service layer: build a catalog, search it, register
//! a customer, and take a booking through its lifecycle.

use wayfare::{
    data::filter::{Criterion, FilterSet},
    error::{ConflictError, Error, ValidationError},
    model::{
        location::LocationDraft, meal::MealDraft, tour::TourDraft, transport::TransportDraft,
        user::UserDraft,
    },
    service::{
        BookingService, LocationService, LocationTypeService, MealService, MealTypeService,
        TourService, TourTypeService, TransportService, TransportTypeService, UserService,
        UserTypeService,
    },
};
use wayfare_test_utils::prelude::*;

#[tokio::test]
async fn catalog_search_and_booking_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_travel_tables!()?;
    let db = &test.db;

    // Reference data.
    let hiking = TourTypeService::new(db).create("Hiking").await.unwrap();
    let coach = TransportTypeService::new(db).create("Coach").await.unwrap();
    let vegetarian = MealTypeService::new(db).create("Vegetarian").await.unwrap();
    let mountain = LocationTypeService::new(db).create("Mountain").await.unwrap();
    let customer = UserTypeService::new(db)
        .create("Customer", false, false)
        .await
        .unwrap();

    // Catalog.
    let transport = TransportService::new(db)
        .create(&TransportDraft {
            name: "Alpine Express".to_string(),
            price_per_person: 45.0,
            transport_type_id: coach.id,
        })
        .await
        .unwrap();
    let meal = MealService::new(db)
        .create(&MealDraft {
            name: "Full board".to_string(),
            meals_per_day: 3,
            cost_per_day: 45.0,
            meal_type_ids: Some(vec![vegetarian.id]),
        })
        .await
        .unwrap();
    let zermatt = LocationService::new(db)
        .create(&LocationDraft {
            name: "Zermatt".to_string(),
            country: "Switzerland".to_string(),
            description: Some("Car-free village under the Matterhorn".to_string()),
            location_type_id: mountain.id,
        })
        .await
        .unwrap();

    let tours = TourService::new(db);
    let tour = tours
        .create(&TourDraft {
            description: "Matterhorn panorama trek".to_string(),
            tour_type_id: hiking.id,
            transport_id: Some(transport.id),
            meal_id: Some(meal.id),
            start_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 4),
            end_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 11),
            price: 1250.0,
            active: true,
            location_ids: Some(vec![zermatt.id]),
        })
        .await
        .unwrap();

    // The customer finds the tour through the search builder.
    let filters = FilterSet::new()
        .with("country", Criterion::Equals("Switzerland".into()))
        .with("min_price", Criterion::GreaterOrEqual(1000.0.into()))
        .with("active", Criterion::Equals(true.into()));
    let found = tours.search(&filters).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, tour.id);

    let details = tours.get_details(tour.id).await.unwrap();
    assert_eq!(details.tour_type.map(|t| t.name), Some("Hiking".to_string()));
    assert_eq!(details.locations.len(), 1);

    // Registration and booking.
    let users = UserService::new(db);
    let ada = users
        .create(&UserDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            user_type_id: customer.id,
        })
        .await
        .unwrap();

    let bookings = BookingService::new(db);
    bookings.book(ada.id, tour.id).await.unwrap();

    let double = bookings.book(ada.id, tour.id).await;
    assert!(matches!(
        double,
        Err(Error::Conflict(ConflictError::DuplicateBooking { .. }))
    ));

    let booked = bookings.tours_for_user(ada.id).await.unwrap();
    assert_eq!(booked.len(), 1);

    // The tour is withdrawn; new bookings stop, the search no longer finds it.
    let mut withdrawn = TourDraft {
        description: details.tour.description.clone(),
        tour_type_id: hiking.id,
        transport_id: Some(transport.id),
        meal_id: Some(meal.id),
        start_date: details.tour.start_date,
        end_date: details.tour.end_date,
        price: details.tour.price,
        active: false,
        location_ids: Some(vec![zermatt.id]),
    };
    tours.update(tour.id, &withdrawn).await.unwrap();

    let grace = users
        .create(&UserDraft {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            user_type_id: customer.id,
        })
        .await
        .unwrap();
    assert!(matches!(
        bookings.book(grace.id, tour.id).await,
        Err(Error::Validation(ValidationError::TourNotBookable(_)))
    ));
    assert!(tours.search(&filters).await.unwrap().is_empty());

    // Reactivate, cancel, and finally delete the tour outright.
    withdrawn.active = true;
    tours.update(tour.id, &withdrawn).await.unwrap();

    bookings.cancel(ada.id, tour.id).await.unwrap();
    assert!(bookings.tours_for_user(ada.id).await.unwrap().is_empty());

    bookings.book(grace.id, tour.id).await.unwrap();
    tours.delete(tour.id).await.unwrap();
    assert!(matches!(
        tours.get(tour.id).await,
        Err(Error::NotFound { entity: "tour", .. })
    ));
    assert!(bookings.tours_for_user(grace.id).await.unwrap().is_empty());

    Ok(())
}

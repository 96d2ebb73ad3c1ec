//! Database model type aliases.
//!
//! Short names for the sea-orm entity models, so service signatures do not
//! spell out `entity::*::Model` everywhere.

pub type TourModel = entity::tour::Model;
pub type TourTypeModel = entity::tour_type::Model;
pub type TransportModel = entity::transport::Model;
pub type TransportTypeModel = entity::transport_type::Model;
pub type MealModel = entity::meal::Model;
pub type MealTypeModel = entity::meal_type::Model;
pub type LocationModel = entity::location::Model;
pub type LocationTypeModel = entity::location_type::Model;
pub type UserModel = entity::user::Model;
pub type UserTypeModel = entity::user_type::Model;

/// A row of the tour ↔ location association table.
pub type TourLocationModel = entity::tour_location::Model;
/// A row of the meal ↔ meal type association table.
pub type MealMealTypeModel = entity::meal_meal_type::Model;
/// One booking: a user ↔ tour association row with its booking timestamp.
pub type BookingModel = entity::user_tour::Model;

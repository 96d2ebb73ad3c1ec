pub use super::location::Entity as Location;
pub use super::location_type::Entity as LocationType;
pub use super::meal::Entity as Meal;
pub use super::meal_meal_type::Entity as MealMealType;
pub use super::meal_type::Entity as MealType;
pub use super::tour::Entity as Tour;
pub use super::tour_location::Entity as TourLocation;
pub use super::tour_type::Entity as TourType;
pub use super::transport::Entity as Transport;
pub use super::transport_type::Entity as TransportType;
pub use super::user::Entity as User;
pub use super::user_tour::Entity as UserTour;
pub use super::user_type::Entity as UserType;

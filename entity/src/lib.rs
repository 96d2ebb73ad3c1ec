pub mod prelude;

pub mod location;
pub mod location_type;
pub mod meal;
pub mod meal_meal_type;
pub mod meal_type;
pub mod tour;
pub mod tour_location;
pub mod tour_type;
pub mod transport;
pub mod transport_type;
pub mod user;
pub mod user_tour;
pub mod user_type;

//! Repositories for many-to-many link tables.
//!
//! Each exposes link/unlink primitives plus hydrated reads from either side.
//! `replace_for_*` swaps the full association set of one owner; callers that
//! need atomicity run it on a transaction connection.

mod meal_meal_type;
mod tour_location;
mod user_tour;

pub use meal_meal_type::MealMealTypeRepository;
pub use tour_location::TourLocationRepository;
pub use user_tour::UserTourRepository;

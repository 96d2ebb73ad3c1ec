//! Business rules on top of the repositories.
//!
//! Services validate drafts before touching the database, detect duplicates
//! and report them as structured conflicts, and wrap multi-statement writes
//! (association replacement, cascading deletes) in transactions so a failed
//! step leaves nothing behind.

pub mod booking;
pub mod location;
pub mod lookup;
pub mod meal;
pub mod tour;
pub mod transport;
pub mod user;

pub use booking::BookingService;
pub use location::LocationService;
pub use lookup::{
    LocationTypeService, LookupService, MealTypeService, TourTypeService, TransportTypeService,
};
pub use meal::MealService;
pub use tour::TourService;
pub use transport::TransportService;
pub use user::{UserService, UserTypeService};

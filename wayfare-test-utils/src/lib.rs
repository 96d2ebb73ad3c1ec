pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{test_setup_with_tables, test_setup_with_travel_tables, TestError, TestSetup};
}

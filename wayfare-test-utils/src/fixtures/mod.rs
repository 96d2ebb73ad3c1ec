//! Database fixture helpers.
//!
//! Insert helpers reachable through accessor methods on [`TestSetup`](crate::TestSetup)
//! (`test.travel()`, `test.users()`). Each helper writes one row directly through
//! an active model so fixtures do not depend on the crate under test.

pub mod travel;
pub mod user;

//! Boundary types shared with the front end.
//!
//! Drafts carry user-edited fields into the service layer; detail views carry
//! hydrated entities back out. Database model aliases live in [`db`].

pub mod db;
pub mod location;
pub mod meal;
pub mod tour;
pub mod transport;
pub mod user;

//! Error types for the wayfare service and data layers.
//!
//! The repository layer reports database failures through [`sea_orm::DbErr`]
//! only; services lift those into [`Error`] and add the two business-level
//! channels: validation failures (bad input, never reaches the database) and
//! conflicts (duplicate names, duplicate bookings). Conflicts are structured
//! variants rather than message-text matching, so callers can branch on them.

pub mod conflict;
pub mod validation;

use thiserror::Error;

pub use conflict::ConflictError;
pub use validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before any database call.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The write collides with existing data (duplicate name, booking, email).
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    /// A referenced row does not exist.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: i32 },
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

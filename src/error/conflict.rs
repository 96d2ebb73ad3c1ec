use sea_orm::{DbErr, SqlErr};

use crate::error::Error;

/// A write that collides with data already present.
// The derive stays fully qualified: importing `thiserror::Error` here would
// clash with the `Error` enum pulled in from the parent module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConflictError {
    #[error("{entity} named `{name}` already exists")]
    DuplicateName {
        entity: &'static str,
        name: String,
    },
    #[error("a user with email `{0}` already exists")]
    DuplicateEmail(String),
    #[error("user {user_id} has already booked tour {tour_id}")]
    DuplicateBooking { user_id: i32, tour_id: i32 },
}

/// Maps a unique-constraint violation onto the given conflict.
///
/// Services check for duplicates up front, but a concurrent writer can still
/// win the race; the database's unique index is the backstop and its error is
/// translated here. Any other database error passes through untouched.
pub(crate) fn unique_violation(err: DbErr, conflict: ConflictError) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::debug!(%conflict, "unique index rejected write");
            Error::Conflict(conflict)
        }
        _ => Error::Db(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod unique_violation {
        use super::*;

        #[test]
        fn unrelated_database_error_passes_through() {
            let err = DbErr::Custom("connection reset".to_string());

            let mapped = super::super::unique_violation(
                err,
                ConflictError::DuplicateEmail("ada@example.com".to_string()),
            );

            assert!(matches!(mapped, Error::Db(DbErr::Custom(message)) if message == "connection reset"));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn names_the_colliding_entity() {
            let conflict = ConflictError::DuplicateName {
                entity: "meal type",
                name: "Vegetarian".to_string(),
            };

            assert_eq!(
                conflict.to_string(),
                "meal type named `Vegetarian` already exists"
            );
        }
    }
}

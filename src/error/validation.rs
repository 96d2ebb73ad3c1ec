use chrono::NaiveDate;
use thiserror::Error;

/// Input rejected by a service before it reaches a repository.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),
    #[error("meals per day must be at least 1, got {0}")]
    InvalidMealsPerDay(i32),
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("tour {0} is not open for booking")]
    TourNotBookable(i32),
}

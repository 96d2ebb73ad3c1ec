//! Data access layer.
//!
//! Repositories wrap table-level CRUD; [`search`] turns a [`filter::FilterSet`]
//! into a parameterized query using the join and column metadata each entity
//! declares through [`search::Searchable`]. All repositories are generic over
//! [`sea_orm::ConnectionTrait`] so they run unchanged inside a transaction.

pub mod filter;
pub mod link;
pub mod location;
pub mod lookup;
pub mod meal;
pub mod search;
pub mod tour;
pub mod transport;
pub mod user;

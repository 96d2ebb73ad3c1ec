//! Tour booking management core.
//!
//! This crate is the data platform behind the booking front end: entity
//! repositories and a dynamic search-query builder over sea-orm, a service
//! layer carrying the business rules (validation, duplicate detection,
//! transactional association replacement), and the configuration and error
//! types shared by both layers. The GUI consumes the service layer; nothing
//! in here renders anything.

pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod model;
pub mod service;

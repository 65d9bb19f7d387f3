//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! collection. Repositories use SeaORM entity models internally and return domain models
//! to maintain separation between the data layer and business logic layer. Each repository
//! offers the same small vocabulary: list everything, look one record up, insert, update
//! and delete. None of them enforce business rules.

pub mod admin;
pub mod booking;
pub mod complaint;
pub mod hotel;
pub mod user;

#[cfg(test)]
mod test;

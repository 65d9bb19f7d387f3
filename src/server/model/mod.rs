//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! The `Envelope` type carries the outcome of every service operation.

pub mod admin;
pub mod booking;
pub mod complaint;
pub mod credentials;
pub mod envelope;
pub mod hotel;
pub mod user;

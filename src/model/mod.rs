//! Request and response DTOs exchanged over the HTTP API.
//!
//! Field names are serialized in camelCase to match the browser client. Request DTOs
//! carry `validator` rules which are checked by the controllers before any service
//! is invoked.

pub mod admin;
pub mod api;
pub mod booking;
pub mod complaint;
pub mod hotel;
pub mod user;

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Duplicate detection, credential checks and status transitions
//! - **Outcomes**: Answering with an `Envelope` for business-rule rejections and
//!   reserving `AppError` for infrastructure failures
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod booking;
pub mod complaint;
pub mod hotel;
pub mod password;
pub mod user;

#[cfg(test)]
mod test;

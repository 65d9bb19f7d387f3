//! SeaORM entity definitions for the hotel booking collections.
//!
//! Each module maps one table. The collections are independent: there are no
//! relations between them, bookings copy hotel details as plain strings.

pub mod prelude;

pub mod admin;
pub mod booking;
pub mod complaint;
pub mod hotel;
pub mod user;

//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Defaults are
//! unique per call so repeated factory calls never trip the unique columns.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let hotel = factory::create_hotel(&db).await?;
//!
//! let booking = factory::booking::BookingFactory::new(&db)
//!     .hotel_name(&hotel.name)
//!     .room_number(12)
//!     .build()
//!     .await?;
//! ```

pub mod admin;
pub mod booking;
pub mod complaint;
pub mod helpers;
pub mod hotel;
pub mod user;

pub use admin::create_admin;
pub use booking::create_booking;
pub use complaint::create_complaint;
pub use hotel::create_hotel;
pub use user::create_user;

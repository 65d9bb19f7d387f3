//! Hotel Booking Test Utils
//!
//! Provides shared testing utilities for the hotel booking backend. This crate offers a
//! builder for creating test contexts backed by in-memory SQLite databases, plus
//! factories that insert rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Hotel;
//!
//! #[tokio::test]
//! async fn test_hotel_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Hotel)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

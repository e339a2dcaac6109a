//! Stayboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the stayboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for marketplace fixtures.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, listings, amenities, bookings and reviews
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_listing() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_marketplace_tables()
//!         .build()
//!         .await?;
//!     let db = &test.db;
//!
//!     let (host, listing) = factory::helpers::create_listing_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

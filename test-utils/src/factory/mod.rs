//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take foreign keys explicitly; the `helpers`
//! module creates common fixture graphs in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guest = factory::create_user(db).await?;
//! let (host, listing) = factory::helpers::create_listing_with_owner(db).await?;
//! let booking = factory::create_booking(db, listing.id, guest.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let listing = factory::accommodation::AccommodationFactory::new(db, host.id)
//!     .city("Lisbon")
//!     .price_per_night(12_000)
//!     .window(from, to)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `amenity` - Create amenity entities and listing links
//! - `accommodation` - Create accommodation listings
//! - `booking` - Create bookings in any status
//! - `review` - Create reviews for bookings
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod accommodation;
pub mod amenity;
pub mod booking;
pub mod helpers;
pub mod review;
pub mod user;

pub use accommodation::create_accommodation;
pub use amenity::{create_amenity, link_amenity};
pub use booking::create_booking;
pub use review::create_review;
pub use user::create_user;

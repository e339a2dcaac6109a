//! SeaORM entity definitions for the booking marketplace schema.

pub mod prelude;

pub mod accommodation;
pub mod accommodation_amenity;
pub mod amenity;
pub mod booking;
pub mod payment;
pub mod review;
pub mod user;
pub mod wishlist_item;

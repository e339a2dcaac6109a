//! Request and response DTOs shared by every API endpoint.

pub mod accommodation;
pub mod amenity;
pub mod api;
pub mod booking;
pub mod payment;
pub mod review;
pub mod user;
pub mod wishlist;

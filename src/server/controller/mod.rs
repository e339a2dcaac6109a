//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into domain
//! parameters, call the service layer and wrap results in the `ApiResponse` envelope.

pub mod accommodation;
pub mod amenity;
pub mod auth;
pub mod booking;
pub mod param;
pub mod payment;
pub mod review;
pub mod user;
pub mod wishlist;

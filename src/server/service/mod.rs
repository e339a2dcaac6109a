//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Booking rules, review eligibility, registration checks
//! - **Orchestration**: Coordinating repositories, the payment gateway and the mailer
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod accommodation;
pub mod amenity;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod mail;
pub mod payment;
pub mod review;
pub mod user;
pub mod wishlist;

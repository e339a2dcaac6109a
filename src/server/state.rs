//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Runtime configuration (pagination limits, payment currency, booking TTL)
//! - Payment gateway used to charge bookings
//! - Mailer used for guest notifications

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::{mail::Mailer, payment::gateway::PaymentGateway},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Config>` and the trait objects are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Settings loaded from the environment at startup.
    pub config: Arc<Config>,

    /// Provider that charges booking totals.
    ///
    /// Either the HTTP gateway or the simulated gateway, depending on whether
    /// `PAYMENT_GATEWAY_URL` is set.
    pub payment_gateway: Arc<dyn PaymentGateway>,

    /// Delivery channel for booking confirmation and cancellation mails.
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    /// - `payment_gateway` - Payment provider implementation
    /// - `mailer` - Mail delivery implementation
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        payment_gateway: Arc<dyn PaymentGateway>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            db,
            config: Arc::new(config),
            payment_gateway,
            mailer,
        }
    }
}

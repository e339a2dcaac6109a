//! Route table and OpenAPI document.
//!
//! Every handler is registered through `utoipa_axum::routes!` so the OpenAPI document
//! served at `/api-docs/openapi.json` (browsable at `/swagger-ui`) always matches the
//! routes. Register and login are rate limited per client IP.

use axum::Router;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{accommodation, amenity, auth, booking, payment, review, user, wishlist},
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Auth requests per client IP: one token replenished every N seconds.
const AUTH_RATE_LIMIT_PERIOD_SECS: u64 = 2;
const AUTH_RATE_LIMIT_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(title = "Stayboard API", description = "Accommodation booking marketplace"),
    tags(
        (name = "auth", description = "Registration and sessions"),
        (name = "admin", description = "User administration"),
        (name = "accommodation", description = "Listings and availability"),
        (name = "amenity", description = "Amenity catalogue"),
        (name = "booking", description = "Reservations"),
        (name = "payment", description = "Booking payments"),
        (name = "review", description = "Guest reviews"),
        (name = "wishlist", description = "Saved listings")
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI.
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router awaiting state and outer layers
/// - `Err(ConfigError::InvalidRateLimit)` - Rate limiter settings rejected
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(AUTH_RATE_LIMIT_PERIOD_SECS)
        .burst_size(AUTH_RATE_LIMIT_BURST)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit)?;

    let rate_limited = OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .layer(GovernorLayer::new(Arc::new(governor)));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(rate_limited)
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::get_all_users))
        .routes(routes!(user::set_admin))
        .routes(routes!(
            accommodation::create_accommodation,
            accommodation::get_accommodations
        ))
        .routes(routes!(
            accommodation::get_accommodation,
            accommodation::update_accommodation,
            accommodation::delete_accommodation
        ))
        .routes(routes!(accommodation::get_availability))
        .routes(routes!(accommodation::get_accommodation_bookings))
        .routes(routes!(review::get_accommodation_reviews))
        .routes(routes!(amenity::get_amenities, amenity::create_amenity))
        .routes(routes!(amenity::delete_amenity))
        .routes(routes!(booking::create_booking, booking::get_my_bookings))
        .routes(routes!(booking::get_booking))
        .routes(routes!(booking::cancel_booking))
        .routes(routes!(payment::pay_booking))
        .routes(routes!(payment::get_booking_payments))
        .routes(routes!(review::create_review))
        .routes(routes!(review::delete_review))
        .routes(routes!(wishlist::get_wishlist))
        .routes(routes!(
            wishlist::add_to_wishlist,
            wishlist::remove_from_wishlist
        ))
        .split_for_parts();

    Ok(router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api)))
}

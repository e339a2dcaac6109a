use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PaginatedDto},
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::BookingRequest,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Reserve a listing for the logged-in user.
///
/// The booking is created `pending` and priced at nights × nightly price. Bookings must
/// start tomorrow or later, fit the listing's window and capacity, and not overlap a
/// pending or confirmed booking. Back-to-back stays sharing a boundary day are allowed.
///
/// # Returns
/// - `201 Created` - Booking created
/// - `400 Bad Request` - Invalid dates, party size, or own listing
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Accommodation not found
/// - `409 Conflict` - Dates already booked
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = ApiResponse<BookingDto>),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 409, description = "Dates unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .create(
            BookingRequest::from_dto(user.id, payload),
            Utc::now().date_naive(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booking.into_dto()))))
}

/// Get the logged-in user's bookings, newest first.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: PAGE_SIZE)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = ApiResponse<PaginatedDto<BookingDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db)
        .list_for_guest(user.id, pagination.resolve(&state.config.pagination))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(bookings.into_dto(|b| b.into_dto()))),
    ))
}

/// Get a booking.
///
/// # Access Control
/// - The guest, the listing's host, or an admin
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = ApiResponse<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not related to the booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db).get_for_user(&user, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(booking.into_dto()))))
}

/// Cancel a booking before check-in.
///
/// Succeeded payments of a confirmed booking are marked refunded.
///
/// # Access Control
/// - The guest, the listing's host, or an admin
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled booking", body = ApiResponse<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not related to the booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking can no longer be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .cancel(&user, id, Utc::now().date_naive(), state.mailer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(booking.into_dto()))))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        payment::{BookingPaymentDto, PaymentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::payment::PaymentService,
        state::AppState,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Pay for a pending booking.
///
/// Charges the booking total through the configured payment provider. On approval the
/// booking is confirmed and the guest receives a confirmation mail; a decline is
/// recorded as a failed payment.
///
/// # Access Control
/// - Only the booking's guest
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/payment",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Payment succeeded, booking confirmed", body = ApiResponse<BookingPaymentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 402, description = "Payment declined", body = ErrorDto),
        (status = 403, description = "User is not the guest", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is not awaiting payment", body = ErrorDto),
        (status = 502, description = "Payment provider unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (booking, payment) = PaymentService::new(
        &state.db,
        state.payment_gateway.as_ref(),
        state.mailer.as_ref(),
        &state.config.payment.currency,
    )
    .pay(&user, id)
    .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(BookingPaymentDto {
            booking: booking.into_dto(),
            payment: payment.into_dto(),
        })),
    ))
}

/// Get the payment attempts of a booking, oldest first.
///
/// # Access Control
/// - The guest, the listing's host, or an admin
#[utoipa::path(
    get,
    path = "/api/bookings/{id}/payments",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payments", body = ApiResponse<Vec<PaymentDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not related to the booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_payments(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payments = PaymentService::new(
        &state.db,
        state.payment_gateway.as_ref(),
        state.mailer.as_ref(),
        &state.config.payment.currency,
    )
    .history(&user, id)
    .await?;
    let dto: Vec<PaymentDto> = payments.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

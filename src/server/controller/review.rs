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
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::CreateReviewParams,
        service::review::ReviewService,
        state::AppState,
    },
};

pub static REVIEW_TAG: &str = "review";

/// Review a finished stay.
///
/// # Access Control
/// - Only the booking's guest
///
/// # Returns
/// - `201 Created` - Review created
/// - `400 Bad Request` - Rating outside 1 to 5
/// - `409 Conflict` - Stay not over yet, booking cancelled, or already reviewed
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/review",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the guest", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking cannot be reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateReviewParams {
        booking_id,
        author_id: user.id,
        rating: payload.rating,
        comment: payload.comment.trim().to_string(),
    };
    let review = ReviewService::new(&state.db)
        .create(&user, params, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/accommodations/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: PAGE_SIZE)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = ApiResponse<PaginatedDto<ReviewDto>>),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accommodation_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .list_for_accommodation(id, pagination.resolve(&state.config.pagination))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(reviews.into_dto(|r| r.into_dto()))),
    ))
}

/// Delete a review.
///
/// # Access Control
/// - The review's author, or an admin
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted review"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReviewService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

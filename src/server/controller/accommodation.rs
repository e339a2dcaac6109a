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
        accommodation::{AccommodationDto, AccommodationFormDto, AvailabilityDto},
        api::{ApiResponse, ErrorDto, PaginatedDto},
        booking::BookingDto,
    },
    server::{
        controller::param::AccommodationQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::accommodation::{
            AccommodationFields, CreateAccommodationParams, UpdateAccommodationParams,
        },
        service::{
            accommodation::AccommodationService, availability::AvailabilityService,
            booking::BookingService,
        },
        state::AppState,
    },
};

/// Tag for grouping accommodation endpoints in OpenAPI documentation
pub static ACCOMMODATION_TAG: &str = "accommodation";

/// Create a listing owned by the logged-in user.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `201 Created` - Listing created
/// - `400 Bad Request` - Invalid fields or unknown amenity IDs
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/accommodations",
    tag = ACCOMMODATION_TAG,
    request_body = AccommodationFormDto,
    responses(
        (status = 201, description = "Successfully created accommodation", body = ApiResponse<AccommodationDto>),
        (status = 400, description = "Invalid accommodation data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_accommodation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AccommodationFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let accommodation = AccommodationService::new(&state.db)
        .create(CreateAccommodationParams {
            owner_id: user.id,
            fields: AccommodationFields::from_dto(payload),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(accommodation.into_dto())),
    ))
}

/// Browse listings.
///
/// Filters combine with AND. `amenity` takes a comma-separated ID list and requires
/// every amenity; `available_from`/`available_to` must be given together and require
/// the listing's window to cover the stay.
#[utoipa::path(
    get,
    path = "/api/accommodations",
    tag = ACCOMMODATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: PAGE_SIZE)"),
        ("city" = Option<String>, Query, description = "Case-insensitive city substring"),
        ("min_price" = Option<i64>, Query, description = "Minimum nightly price"),
        ("max_price" = Option<i64>, Query, description = "Maximum nightly price"),
        ("guests" = Option<i32>, Query, description = "Party size to accommodate"),
        ("amenity" = Option<String>, Query, description = "Comma-separated amenity IDs"),
        ("available_from" = Option<String>, Query, description = "Stay start (YYYY-MM-DD)"),
        ("available_to" = Option<String>, Query, description = "Stay end (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved accommodations", body = ApiResponse<PaginatedDto<AccommodationDto>>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accommodations(
    State(state): State<AppState>,
    Query(query): Query<AccommodationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.pagination().resolve(&state.config.pagination);
    let filter = query.into_filter()?;

    let accommodations = AccommodationService::new(&state.db)
        .search(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(accommodations.into_dto(|a| a.into_dto()))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved accommodation", body = ApiResponse<AccommodationDto>),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accommodation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let accommodation = AccommodationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(accommodation.into_dto()))))
}

/// Replace a listing's fields and amenities.
///
/// # Access Control
/// - `AccommodationOwner` - The host of the listing, or an admin
#[utoipa::path(
    put,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    request_body = AccommodationFormDto,
    responses(
        (status = 200, description = "Successfully updated accommodation", body = ApiResponse<AccommodationDto>),
        (status = 400, description = "Invalid accommodation data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_accommodation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AccommodationFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AccommodationOwner(id)])
        .await?;

    let accommodation = AccommodationService::new(&state.db)
        .update(UpdateAccommodationParams {
            id,
            fields: AccommodationFields::from_dto(payload),
        })
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(accommodation.into_dto()))))
}

/// Delete a listing with its bookings, payments, reviews and wishlist entries.
///
/// # Access Control
/// - `AccommodationOwner` - The host of the listing, or an admin
#[utoipa::path(
    delete,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted accommodation"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_accommodation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AccommodationOwner(id)])
        .await?;

    AccommodationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the free date ranges of a listing.
///
/// Ranges start no earlier than tomorrow and are carved out by confirmed bookings only.
/// `available_dates` is `null` when nothing is free.
///
/// # Returns
/// - `200 OK` - Availability computed
/// - `404 Not Found` - Accommodation not found
/// - `500 Internal Server Error` - Stored bookings overlap
#[utoipa::path(
    get,
    path = "/api/accommodations/{id}/availability",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 200, description = "Successfully computed availability", body = ApiResponse<AvailabilityDto>),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let availability = AvailabilityService::new(&state.db)
        .get_availability(id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(availability.into_dto()))))
}

/// Get every booking of a listing.
///
/// # Access Control
/// - `AccommodationOwner` - The host of the listing, or an admin
#[utoipa::path(
    get,
    path = "/api/accommodations/{id}/bookings",
    tag = ACCOMMODATION_TAG,
    params(
        ("id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = ApiResponse<Vec<BookingDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the accommodation", body = ErrorDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accommodation_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AccommodationOwner(id)])
        .await?;

    let bookings = BookingService::new(&state.db)
        .list_for_accommodation(id)
        .await?;
    let dto: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

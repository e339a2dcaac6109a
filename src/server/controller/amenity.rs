use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        amenity::{AmenityDto, CreateAmenityDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::amenity::AmenityService,
        state::AppState,
    },
};

pub static AMENITY_TAG: &str = "amenity";

#[utoipa::path(
    get,
    path = "/api/amenities",
    tag = AMENITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved amenities", body = ApiResponse<Vec<AmenityDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let amenities = AmenityService::new(&state.db).get_all().await?;
    let dto: Vec<AmenityDto> = amenities.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Create an amenity.
///
/// # Access Control
/// - `Admin` - Only admins can manage amenities
#[utoipa::path(
    post,
    path = "/api/amenities",
    tag = AMENITY_TAG,
    request_body = CreateAmenityDto,
    responses(
        (status = 201, description = "Successfully created amenity", body = ApiResponse<AmenityDto>),
        (status = 400, description = "Blank amenity name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Amenity already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let amenity = AmenityService::new(&state.db).create(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(amenity.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/amenities/{id}",
    tag = AMENITY_TAG,
    params(
        ("id" = i32, Path, description = "Amenity ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted amenity"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_amenity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AmenityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

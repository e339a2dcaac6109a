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
        wishlist::WishlistEntryDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::wishlist::WishlistService,
        state::AppState,
    },
};

pub static WISHLIST_TAG: &str = "wishlist";

#[utoipa::path(
    get,
    path = "/api/wishlist",
    tag = WISHLIST_TAG,
    responses(
        (status = 200, description = "Saved accommodations, newest first", body = ApiResponse<Vec<WishlistEntryDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let entries = WishlistService::new(&state.db).list(user.id).await?;
    let dto: Vec<WishlistEntryDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

#[utoipa::path(
    put,
    path = "/api/wishlist/{accommodation_id}",
    tag = WISHLIST_TAG,
    params(
        ("accommodation_id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 204, description = "Accommodation saved"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(accommodation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    WishlistService::new(&state.db)
        .add(user.id, accommodation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{accommodation_id}",
    tag = WISHLIST_TAG,
    params(
        ("accommodation_id" = i32, Path, description = "Accommodation ID")
    ),
    responses(
        (status = 204, description = "Accommodation removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(accommodation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    WishlistService::new(&state.db)
        .remove(user.id, accommodation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

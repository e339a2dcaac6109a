use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} stored in session was not found in database")]
    UserNotInDatabase(i32),

    /// Email or password did not match.
    ///
    /// The same variant is used for both cases so responses don't reveal which
    /// emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email {0} is already registered")]
    EmailTaken(String),

    /// User is authenticated but lacks the permission for this action.
    ///
    /// Results in a 403 Forbidden response. The message is logged, not returned.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `EmailTaken` → 409 Conflict
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "You must be logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::EmailTaken(_) => (StatusCode::CONFLICT, "Email is already registered"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// Provider refused the charge.
    ///
    /// Results in a 402 Payment Required response carrying the provider's reason.
    #[error("Payment declined: {0}")]
    Declined(String),

    /// Provider could not be reached or answered with something unexpected.
    ///
    /// Results in a 502 Bad Gateway response. Details are logged, not returned.
    #[error("Payment gateway failure: {0}")]
    Gateway(String),
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        PaymentError::Gateway(err.to_string())
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::Declined(_) => {
                (StatusCode::PAYMENT_REQUIRED, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            Self::Gateway(msg) => {
                tracing::error!("Payment gateway failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new("Payment provider unavailable, please try again")),
                )
                    .into_response()
            }
        }
    }
}

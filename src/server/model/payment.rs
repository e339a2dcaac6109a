//! Payment records and gateway exchange types.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::payment::PaymentDto,
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Succeeded,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "succeeded" => Ok(Self::Succeeded),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            other => Err(InternalError::UnknownStatus {
                kind: "payment",
                value: other.to_string(),
            }),
        }
    }
}

/// Charge attempt recorded against a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub booking_id: i32,
    pub amount: i64,
    pub currency: String,
    /// Provider-side charge ID, absent when the provider never answered with one.
    pub provider_reference: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            booking_id: entity.booking_id,
            amount: entity.amount,
            currency: entity.currency,
            provider_reference: entity.provider_reference,
            status: entity.status.parse()?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            booking_id: self.booking_id,
            amount: self.amount,
            currency: self.currency,
            provider_reference: self.provider_reference,
            status: self.status.to_string(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub booking_id: i32,
    pub amount: i64,
    pub currency: String,
    pub provider_reference: Option<String>,
    pub status: PaymentStatus,
}

/// Charge sent to the payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeRequest {
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    /// Idempotency reference identifying the booking.
    pub reference: String,
}

/// Provider's verdict on a charge.
#[derive(Debug, Clone, PartialEq)]
pub enum ChargeOutcome {
    Approved { reference: String },
    Declined { reference: Option<String>, reason: String },
}

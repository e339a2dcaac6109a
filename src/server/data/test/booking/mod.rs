use crate::server::{
    data::{booking::BookingRepository, payment::PaymentRepository},
    error::AppError,
    model::{
        booking::{BookingStatus, CreateBookingParams},
        pagination::PageRequest,
        payment::{CreatePaymentParams, PaymentStatus},
    },
    util::availability::BookingInterval,
};
use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::days_from_today},
};

mod cancel_if_status;
mod complete_past;
mod confirm_with_payment;
mod create_if_available;
mod expire_pending;
mod get_by_guest_paginated;
mod get_confirmed_intervals;

fn succeeded_payment(booking_id: i32) -> CreatePaymentParams {
    CreatePaymentParams {
        booking_id,
        amount: 30_000,
        currency: "usd".to_string(),
        provider_reference: Some(format!("ch_{}", booking_id)),
        status: PaymentStatus::Succeeded,
    }
}

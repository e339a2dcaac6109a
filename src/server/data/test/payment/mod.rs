use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::payment::{CreatePaymentParams, PaymentStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod refund_succeeded;

fn params(booking_id: i32, status: PaymentStatus) -> CreatePaymentParams {
    CreatePaymentParams {
        booking_id,
        amount: 30_000,
        currency: "usd".to_string(),
        provider_reference: Some(format!("ch_{}", booking_id)),
        status,
    }
}

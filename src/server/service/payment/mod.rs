//! Booking payments.
//!
//! A pending booking is charged through the configured `PaymentGateway`. Every
//! answered attempt is recorded; an approval confirms the booking and notifies the guest.

pub mod gateway;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, payment::PaymentRepository},
    error::{auth::AuthError, booking::BookingError, payment::PaymentError, AppError},
    model::{
        booking::{Booking, BookingStatus},
        payment::{ChargeOutcome, ChargeRequest, CreatePaymentParams, Payment, PaymentStatus},
        user::User,
    },
    service::{
        booking::BookingService,
        mail::{send_logged, Mail, Mailer},
    },
};

use self::gateway::PaymentGateway;

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn PaymentGateway,
    mailer: &'a dyn Mailer,
    currency: &'a str,
}

impl<'a> PaymentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn PaymentGateway,
        mailer: &'a dyn Mailer,
        currency: &'a str,
    ) -> Self {
        Self {
            db,
            gateway,
            mailer,
            currency,
        }
    }

    /// Charges the booking total and confirms the booking on approval.
    ///
    /// Only the guest may pay, and only while the booking is pending.
    ///
    /// # Returns
    /// - `Ok((Booking, Payment))` - Confirmed booking and the succeeded payment
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller is not the guest
    /// - `Err(BookingError::NotPayable)` - Booking is not pending, or stopped being pending
    ///   before the charge was approved; the approved charge is then recorded as refunded
    /// - `Err(PaymentError::Declined)` - Provider declined; a failed payment is recorded
    /// - `Err(PaymentError::Gateway)` - Provider unavailable; nothing is recorded
    pub async fn pay(&self, user: &User, booking_id: i32) -> Result<(Booking, Payment), AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let payment_repo = PaymentRepository::new(self.db);

        let booking = booking_repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.guest_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to pay for booking {} of another guest", booking.id),
            )
            .into());
        }
        if booking.status != BookingStatus::Pending {
            return Err(BookingError::NotPayable(booking.id).into());
        }

        let outcome = self
            .gateway
            .charge(ChargeRequest {
                amount: booking.total_price,
                currency: self.currency.to_string(),
                reference: format!("booking-{}", booking.id),
            })
            .await?;

        match outcome {
            ChargeOutcome::Approved { reference } => {
                let params = CreatePaymentParams {
                    booking_id: booking.id,
                    amount: booking.total_price,
                    currency: self.currency.to_string(),
                    provider_reference: Some(reference),
                    status: PaymentStatus::Succeeded,
                };

                let Some((confirmed, payment)) = booking_repo
                    .confirm_with_payment(booking.id, params.clone())
                    .await?
                else {
                    // Expired or cancelled while the charge was in flight
                    let refunded = payment_repo
                        .create(CreatePaymentParams {
                            status: PaymentStatus::Refunded,
                            ..params
                        })
                        .await?;
                    tracing::warn!(
                        "Booking {} left pending during charge, payment {} refunded",
                        booking.id,
                        refunded.id
                    );

                    return Err(BookingError::NotPayable(booking.id).into());
                };

                tracing::info!("Booking {} confirmed by payment {}", confirmed.id, payment.id);

                send_logged(self.mailer, Mail::booking_confirmed(user, &confirmed)).await;

                Ok((confirmed, payment))
            }
            ChargeOutcome::Declined { reference, reason } => {
                payment_repo
                    .create(CreatePaymentParams {
                        booking_id: booking.id,
                        amount: booking.total_price,
                        currency: self.currency.to_string(),
                        provider_reference: reference,
                        status: PaymentStatus::Failed,
                    })
                    .await?;

                tracing::info!("Payment for booking {} declined: {}", booking.id, reason);

                Err(PaymentError::Declined(reason).into())
            }
        }
    }

    /// Gets the payment history of a booking visible to the caller.
    pub async fn history(&self, user: &User, booking_id: i32) -> Result<Vec<Payment>, AppError> {
        let booking = BookingService::new(self.db)
            .get_for_user(user, booking_id)
            .await?;

        PaymentRepository::new(self.db)
            .get_by_booking(booking.id)
            .await
    }
}

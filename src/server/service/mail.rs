//! Outbound guest notifications.
//!
//! Delivery is abstracted behind the `Mailer` trait. The default `LogMailer` writes
//! messages to the log so the service runs without an SMTP relay.

use async_trait::async_trait;

use crate::server::model::{booking::Booking, user::User};

/// Plain-text message addressed to one recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Mail {
    pub fn booking_confirmed(guest: &User, booking: &Booking) -> Self {
        Self {
            to: guest.email.clone(),
            subject: format!("Booking #{} confirmed", booking.id),
            body: format!(
                "Hi {},\n\nYour stay from {} to {} ({} nights) is confirmed. \
                 Total charged: {}.\n",
                guest.name,
                booking.start_date,
                booking.end_date,
                booking.nights(),
                booking.total_price
            ),
        }
    }

    pub fn booking_cancelled(guest: &User, booking: &Booking) -> Self {
        Self {
            to: guest.email.clone(),
            subject: format!("Booking #{} cancelled", booking.id),
            body: format!(
                "Hi {},\n\nYour stay from {} to {} has been cancelled.\n",
                guest.name, booking.start_date, booking.end_date
            ),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Delivers a message. Errors are reported as strings and never abort the caller's request.
    async fn send(&self, mail: Mail) -> Result<(), String>;
}

/// Mailer that logs every message at info level.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: Mail) -> Result<(), String> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "Sending mail");
        tracing::debug!("{}", mail.body);
        Ok(())
    }
}

/// Sends a message and logs a delivery failure instead of returning it.
pub async fn send_logged(mailer: &dyn Mailer, mail: Mail) {
    let to = mail.to.clone();
    if let Err(e) = mailer.send(mail).await {
        tracing::error!("Failed to send mail to {}: {}", to, e);
    }
}

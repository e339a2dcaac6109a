//! Payment provider clients.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::{
    error::payment::PaymentError,
    model::payment::{ChargeOutcome, ChargeRequest},
};

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Charges the amount described by `request`.
    ///
    /// # Returns
    /// - `Ok(ChargeOutcome::Approved)` - Money was captured
    /// - `Ok(ChargeOutcome::Declined)` - Provider refused the charge
    /// - `Err(PaymentError::Gateway)` - Provider unreachable or answered unexpectedly
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeOutcome, PaymentError>;
}

#[derive(Serialize)]
struct ChargeBody<'a> {
    amount: i64,
    currency: &'a str,
    reference: &'a str,
}

#[derive(Deserialize)]
struct ChargeResponse {
    id: String,
    status: String,
    #[serde(default)]
    failure_message: Option<String>,
}

/// Gateway talking to a JSON payment API.
///
/// Sends `POST {base_url}/charges` with a bearer key and reads `{id, status}` back.
/// `status` of `succeeded` approves the charge; `failed` or `declined` declines it.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    charges_url: Url,
    api_key: String,
}

impl HttpPaymentGateway {
    pub fn new(
        client: reqwest::Client,
        base_url: &Url,
        api_key: String,
    ) -> Result<Self, url::ParseError> {
        // Keep any path prefix of the base URL.
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self {
            client,
            charges_url: base.join("charges")?,
            api_key,
        })
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeOutcome, PaymentError> {
        let response = self
            .client
            .post(self.charges_url.clone())
            .bearer_auth(&self.api_key)
            .json(&ChargeBody {
                amount: request.amount,
                currency: &request.currency,
                reference: &request.reference,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(PaymentError::Gateway(format!(
                "Provider answered {} for charge {}",
                status, request.reference
            )));
        }

        let body: ChargeResponse = response.json().await?;

        match body.status.as_str() {
            "succeeded" => Ok(ChargeOutcome::Approved { reference: body.id }),
            "failed" | "declined" => Ok(ChargeOutcome::Declined {
                reference: Some(body.id),
                reason: body
                    .failure_message
                    .unwrap_or_else(|| "Card was declined".to_string()),
            }),
            other => Err(PaymentError::Gateway(format!(
                "Unexpected charge status '{}' for {}",
                other, request.reference
            ))),
        }
    }
}

/// Gateway approving every charge, used when no provider is configured.
pub struct SimulatedPaymentGateway;

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeOutcome, PaymentError> {
        tracing::info!(
            "Simulated charge of {} {} for {}",
            request.amount,
            request.currency,
            request.reference
        );

        Ok(ChargeOutcome::Approved {
            reference: format!("sim_{}", request.reference),
        })
    }
}

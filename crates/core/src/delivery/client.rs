//! HTTP client for the delivery provider.

use relay_shared::DeliveryConfig;
use serde_json::Value;

use super::error::DeliveryError;
use super::types::OutboundEmail;
use crate::relay::Mailer;

/// Client for a Resend-compatible email delivery API.
///
/// Constructed once at process start and shared across requests; the
/// inner `reqwest::Client` pools connections internally.
#[derive(Clone)]
pub struct DeliveryClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl DeliveryClient {
    /// Creates a new delivery client.
    #[must_use]
    pub fn new(config: &DeliveryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl Mailer for DeliveryClient {
    /// Send one email, returning the provider's raw JSON receipt.
    async fn send(&self, email: &OutboundEmail) -> Result<Value, DeliveryError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| DeliveryError::InvalidResponse(e.to_string()))
    }
}

//! Payment-intent confirmation relay.
//!
//! The payment element itself is a third-party embed outside this stack;
//! the backend relays confirmation outcomes. When the processor declines,
//! its human-readable message arrives under `processorMessage` and is
//! surfaced verbatim as [`ApiError::Processor`]. Retrying re-uses the
//! same intent id — the transaction is never re-created client-side.

use crate::error::{status_error, ApiError};
use crate::types::PaymentConfirmation;

/// Client for the payment-confirmation endpoint.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl PaymentClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Confirm a payment intent.
    ///
    /// Calls `POST {base_url}/payments/{intent}/confirm/` with an empty
    /// body. Processor declines map to [`ApiError::Processor`] with the
    /// processor's message verbatim.
    pub async fn confirm(&self, intent_id: &str) -> Result<PaymentConfirmation, ApiError> {
        let endpoint = format!("POST /payments/{intent_id}/confirm/");
        let url = format!("{}payments/{intent_id}/confirm/", self.base_url);

        let resp = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(status_error(&endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ApiError::Deserialization {
            endpoint,
            source: e,
        })
    }
}

//! Typed client for investment requests.
//!
//! The request/approval workflow is server-owned; the client raises
//! requests and refreshes their status on demand (there is no polling
//! loop — refresh is an explicit caller action).
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/spv/{id}/investments/` | List requests against an SPV |
//! | POST   | `/spv/{id}/investments/` | Raise an investment request |
//! | GET    | `/investments/{id}/` | Refresh one request's status |

use serde::Serialize;

use synd_core::{InvestmentId, SpvId};

use crate::error::{status_error, ApiError};
use crate::types::InvestmentRecord;

#[derive(Debug, Serialize)]
struct CreateInvestmentRequest<'a> {
    /// Decimal amount as a string, exactly as the backend expects it.
    amount: &'a str,
}

/// Client for the investment endpoints.
#[derive(Debug, Clone)]
pub struct InvestmentClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl InvestmentClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List investment requests raised against an SPV.
    ///
    /// Calls `GET {base_url}/spv/{id}/investments/`.
    pub async fn list(&self, spv_id: SpvId) -> Result<Vec<InvestmentRecord>, ApiError> {
        let endpoint = format!("GET /spv/{spv_id}/investments/");
        let url = format!("{}spv/{spv_id}/investments/", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).send())
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

    /// Raise an investment request against an SPV.
    ///
    /// Calls `POST {base_url}/spv/{id}/investments/`.
    pub async fn create_request(
        &self,
        spv_id: SpvId,
        amount: &str,
    ) -> Result<InvestmentRecord, ApiError> {
        let endpoint = format!("POST /spv/{spv_id}/investments/");
        let url = format!("{}spv/{spv_id}/investments/", self.base_url);
        let req = CreateInvestmentRequest { amount };

        let resp = self
            .http
            .post(&url)
            .json(&req)
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

    /// Refresh one investment request's status.
    ///
    /// Calls `GET {base_url}/investments/{id}/`. A 404 returns `Ok(None)`.
    pub async fn get_status(
        &self,
        id: InvestmentId,
    ) -> Result<Option<InvestmentRecord>, ApiError> {
        let endpoint = format!("GET /investments/{id}/");
        let url = format!("{}investments/{id}/", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).send())
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            return Err(status_error(&endpoint, resp).await);
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| ApiError::Deserialization {
                endpoint,
                source: e,
            })
    }
}

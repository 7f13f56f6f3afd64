//! Typed client for special-purpose-vehicle drafts.
//!
//! The SPV-creation wizard persists per-step against an id-addressed
//! resource; the resume probe is a plain GET that treats 404 as "no such
//! draft".
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/spv/` | List the caller's SPVs |
//! | POST   | `/spv/` | Create a draft SPV |
//! | GET    | `/spv/{id}/` | Fetch one SPV, 404 = none |
//! | POST   | `/spv/{id}/update_step{n}/` | Persist one step's fields |

use synd_core::SpvId;

use crate::error::{status_error, ApiError};
use crate::types::{DraftFields, SpvRecord};
use crate::upload::{fields_body, FileUpload};

/// Client for the SPV endpoints.
#[derive(Debug, Clone)]
pub struct SpvClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl SpvClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List the caller's SPVs.
    ///
    /// Calls `GET {base_url}/spv/`.
    pub async fn list(&self) -> Result<Vec<SpvRecord>, ApiError> {
        let endpoint = "GET /spv/";
        let url = format!("{}spv/", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).send())
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(status_error(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Create a draft SPV from the first step's fields.
    ///
    /// Calls `POST {base_url}/spv/`. The response carries the assigned id.
    pub async fn create(
        &self,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<SpvRecord, ApiError> {
        let endpoint = "POST /spv/";
        let url = format!("{}spv/", self.base_url);

        let resp = fields_body(self.http.post(&url), fields, file)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(status_error(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Fetch one SPV by id (the resume probe).
    ///
    /// Calls `GET {base_url}/spv/{id}/`. A 404 returns `Ok(None)`.
    pub async fn get(&self, id: SpvId) -> Result<Option<SpvRecord>, ApiError> {
        let endpoint = format!("GET /spv/{id}/");
        let url = format!("{}spv/{id}/", self.base_url);

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

    /// Persist one step of an SPV draft.
    ///
    /// Calls `POST {base_url}/spv/{id}/update_step{n}/` — multipart when
    /// `file` is present (logo, supporting policy documents), JSON
    /// otherwise. Only the supplied fields change.
    pub async fn update_step(
        &self,
        id: SpvId,
        step: u8,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<SpvRecord, ApiError> {
        let endpoint = format!("POST /spv/{id}/update_step{step}/");
        let url = format!("{}spv/{id}/update_step{step}/", self.base_url);

        let resp = fields_body(self.http.post(&url), fields, file)
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

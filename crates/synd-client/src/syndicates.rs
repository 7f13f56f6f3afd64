//! Typed client for syndicate entity drafts.
//!
//! The syndicate-creation wizard has the same create-or-update duality as
//! onboarding, but its step endpoints carry no id path segment: the first
//! submission POSTs and the response carries the assigned id; subsequent
//! submissions PATCH the same path with the id in the body.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/syndicate/draft/` | Fetch the caller's draft, 404 = none |
//! | POST   | `/syndicate/step{n}/` | Create from one step's fields |
//! | PATCH  | `/syndicate/step{n}/` | Update one step's fields (id in body) |

use synd_core::SyndicateId;

use crate::error::{status_error, ApiError};
use crate::types::{DraftFields, SyndicateRecord};
use crate::upload::{fields_body, FileUpload};

/// Client for the syndicate endpoints.
#[derive(Debug, Clone)]
pub struct SyndicateClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl SyndicateClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch the caller's syndicate draft.
    ///
    /// Calls `GET {base_url}/syndicate/draft/`. A 404 is the normal
    /// "no draft yet" signal and returns `Ok(None)`.
    pub async fn get_draft(&self) -> Result<Option<SyndicateRecord>, ApiError> {
        let endpoint = "GET /syndicate/draft/";
        let url = format!("{}syndicate/draft/", self.base_url);

        let resp = crate::retry::retry_send(|| self.http.get(&url).send())
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            return Err(status_error(endpoint, resp).await);
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| ApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })
    }

    /// Create a syndicate draft from one step's fields.
    ///
    /// Calls `POST {base_url}/syndicate/step{n}/`. The response carries
    /// the assigned id for the rest of the session.
    pub async fn submit_step(
        &self,
        step: u8,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<SyndicateRecord, ApiError> {
        let endpoint = format!("POST /syndicate/step{step}/");
        let url = format!("{}syndicate/step{step}/", self.base_url);

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

    /// Update one step of an existing syndicate draft.
    ///
    /// Calls `PATCH {base_url}/syndicate/step{n}/` with the id injected
    /// into the body (the wire contract has no id path segment for
    /// syndicate steps).
    pub async fn update_step(
        &self,
        id: SyndicateId,
        step: u8,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<SyndicateRecord, ApiError> {
        let endpoint = format!("PATCH /syndicate/step{step}/");
        let url = format!("{}syndicate/step{step}/", self.base_url);

        let mut body = fields.clone();
        body.insert("id".to_string(), serde_json::json!(id.as_uuid()));

        let resp = fields_body(self.http.patch(&url), &body, file)
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

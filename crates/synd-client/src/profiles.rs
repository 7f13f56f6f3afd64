//! Typed client for investor onboarding profile drafts.
//!
//! The onboarding wizard persists one sparse profile record across its
//! steps. A user typically has at most one draft; `GET /profiles/` lists
//! it, and an empty result selects the create path.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/profiles/` | List the caller's draft profiles |
//! | POST   | `/profiles/` | Create a draft from the first step's fields |
//! | PATCH  | `/profiles/{id}/update_step{n}/` | Partial update of one step |
//! | POST   | `/profiles/{id}/submit_application/` | Finalize the application |
//!
//! Step updates send only the supplied fields; omitted fields are
//! preserved server-side. A step that includes a newly selected file goes
//! out as multipart, all others as JSON.

use synd_core::ProfileId;

use crate::error::{status_error, ApiError};
use crate::types::{DraftFields, ProfileRecord};
use crate::upload::{fields_body, FileUpload};

/// Client for the onboarding-profile endpoints.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ProfileClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List the caller's draft profiles (typically zero or one).
    ///
    /// Calls `GET {base_url}/profiles/`. An empty list is the normal
    /// "no draft yet" signal.
    pub async fn list(&self) -> Result<Vec<ProfileRecord>, ApiError> {
        let endpoint = "GET /profiles/";
        let url = format!("{}profiles/", self.base_url);

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

    /// Create a draft profile from the first step's fields.
    ///
    /// Calls `POST {base_url}/profiles/`. The response carries the newly
    /// assigned id, which the caller must retain for every subsequent
    /// step in the session.
    pub async fn create(
        &self,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<ProfileRecord, ApiError> {
        let endpoint = "POST /profiles/";
        let url = format!("{}profiles/", self.base_url);

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

    /// Partially update one onboarding step's fields.
    ///
    /// Calls `PATCH {base_url}/profiles/{id}/update_step{n}/` — multipart
    /// when `file` is present, JSON otherwise. Only the supplied fields
    /// change.
    pub async fn update_step(
        &self,
        id: ProfileId,
        step: u8,
        fields: &DraftFields,
        file: Option<&FileUpload>,
    ) -> Result<ProfileRecord, ApiError> {
        let endpoint = format!("PATCH /profiles/{id}/update_step{step}/");
        let url = format!("{}profiles/{id}/update_step{step}/", self.base_url);

        let resp = fields_body(self.http.patch(&url), fields, file)
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

    /// Finalize the application, transitioning the draft to a submitted
    /// state server-side.
    ///
    /// Calls `POST {base_url}/profiles/{id}/submit_application/` with an
    /// empty body.
    pub async fn submit_application(&self, id: ProfileId) -> Result<ProfileRecord, ApiError> {
        let endpoint = format!("POST /profiles/{id}/submit_application/");
        let url = format!("{}profiles/{id}/submit_application/", self.base_url);

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

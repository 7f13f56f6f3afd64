//! # synd-client — Typed Rust client for the Syndicate Platform API
//!
//! Provides ergonomic, typed access to the platform's REST resources:
//! - **Auth** — login, sign-up, password-reset with OTP verification
//! - **Profiles** — investor onboarding drafts (stepwise partial updates)
//! - **Syndicates** — syndicate entity drafts
//! - **SPVs** — special-purpose-vehicle drafts and their documents
//! - **Investments** — investment requests and status refresh
//! - **Payments** — payment-intent confirmation relay
//!
//! ## Architecture
//!
//! This crate is the ONLY authorized path for the client stack to reach the
//! platform backend. Flow logic (step registries, controllers, handoff
//! state) lives in `synd-flow` and calls through here.
//!
//! ## Draft semantics
//!
//! Draft resources follow a create-or-update duality: a read that finds
//! nothing (`HTTP 404` or an empty list) is the normal "no draft yet"
//! signal and surfaces as `Ok(None)` / an empty `Vec`, never as an error.
//! Partial updates send only the supplied fields; omitted fields — file
//! references in particular — are preserved server-side.

pub mod auth;
pub mod config;
pub mod error;
pub mod investments;
pub mod payments;
pub mod profiles;
pub(crate) mod retry;
pub mod spv;
pub mod syndicates;
pub mod types;
pub mod upload;

pub use config::PlatformConfig;
pub use error::ApiError;
pub use types::DraftFields;
pub use upload::FileUpload;

use std::time::Duration;

/// Top-level platform API client. Holds sub-clients for each resource.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    auth: auth::AuthClient,
    profiles: profiles::ProfileClient,
    syndicates: syndicates::SyndicateClient,
    spv: spv::SpvClient,
    investments: investments::InvestmentClient,
    payments: payments::PaymentClient,
}

impl PlatformClient {
    /// Create a new platform API client from configuration.
    ///
    /// When the configuration carries a bearer token it is installed as a
    /// default header once, here; sub-clients never handle credentials.
    pub fn new(config: PlatformConfig) -> Result<Self, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = &config.api_token {
            let value =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                    .map_err(|_| ApiError::Config(config::ConfigError::InvalidToken))?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            auth: auth::AuthClient::new(http.clone(), config.base_url.clone()),
            profiles: profiles::ProfileClient::new(http.clone(), config.base_url.clone()),
            syndicates: syndicates::SyndicateClient::new(http.clone(), config.base_url.clone()),
            spv: spv::SpvClient::new(http.clone(), config.base_url.clone()),
            investments: investments::InvestmentClient::new(http.clone(), config.base_url.clone()),
            payments: payments::PaymentClient::new(http, config.base_url),
        })
    }

    /// Access the auth client.
    pub fn auth(&self) -> &auth::AuthClient {
        &self.auth
    }

    /// Access the onboarding-profile client.
    pub fn profiles(&self) -> &profiles::ProfileClient {
        &self.profiles
    }

    /// Access the syndicate client.
    pub fn syndicates(&self) -> &syndicates::SyndicateClient {
        &self.syndicates
    }

    /// Access the SPV client.
    pub fn spv(&self) -> &spv::SpvClient {
        &self.spv
    }

    /// Access the investment client.
    pub fn investments(&self) -> &investments::InvestmentClient {
        &self.investments
    }

    /// Access the payment-confirmation client.
    pub fn payments(&self) -> &payments::PaymentClient {
        &self.payments
    }
}

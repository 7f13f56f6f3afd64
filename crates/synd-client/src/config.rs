//! Platform API client configuration.
//!
//! A single base URL selects the backend host; every endpoint is relative
//! to it. Defaults point to production. Override via environment variables
//! or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Production API host.
const DEFAULT_BASE_URL: &str = "https://api.syndplatform.com";

/// Configuration for connecting to the platform API.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct PlatformConfig {
    /// Base URL for the platform backend.
    /// Default: <https://api.syndplatform.com>
    pub base_url: Url,
    /// Bearer token for API authentication. `None` for the endpoints that
    /// precede authentication (sign-up, password reset).
    pub api_token: Option<Zeroizing<String>>,
    /// Request timeout in seconds. Every request is bounded by this; a
    /// hung connection terminates with a transport error instead of
    /// suspending the caller indefinitely.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl PlatformConfig {
    /// Load an authenticated configuration from environment variables.
    ///
    /// Variables:
    /// - `SYND_API_URL` (default: `https://api.syndplatform.com`)
    /// - `SYND_API_TOKEN` (required)
    /// - `SYND_TIMEOUT_SECS` (default: 30)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] when `SYND_API_TOKEN` is
    /// absent — a missing credential is a fatal, user-visible condition,
    /// never a silently unauthenticated request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token =
            std::env::var("SYND_API_TOKEN").map_err(|_| ConfigError::MissingToken)?;

        Ok(Self {
            base_url: env_url("SYND_API_URL", DEFAULT_BASE_URL)?,
            api_token: Some(Zeroizing::new(api_token)),
            timeout_secs: std::env::var("SYND_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create an unauthenticated configuration for the endpoints that
    /// precede login (sign-up, forgot-password, OTP verification).
    pub fn anonymous(base_url: Url) -> Self {
        Self {
            base_url,
            api_token: None,
            timeout_secs: 30,
        }
    }

    /// Attach a bearer token, e.g. after login or when resuming a session
    /// from stored credentials.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(Zeroizing::new(token.into()));
        self
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be
    /// parsed (should not occur for valid port numbers, but avoids
    /// `expect()`).
    pub fn local_mock(port: u16, token: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&format!("http://127.0.0.1:{port}"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            api_token: Some(Zeroizing::new(token.to_string())),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SYND_API_TOKEN environment variable is required")]
    MissingToken,
    #[error("bearer token contains characters not permitted in a header")]
    InvalidToken,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

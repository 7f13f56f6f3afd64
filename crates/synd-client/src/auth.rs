//! Typed client for authentication endpoints.
//!
//! Covers login/sign-up plus the three-hop password-reset sequence
//! (forgot-password → OTP verification → reset). These endpoints precede
//! authentication, so an anonymous configuration is sufficient.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/auth/login/` | Exchange credentials for a token pair |
//! | POST   | `/auth/signup/` | Create an account for the selected role |
//! | POST   | `/auth/logout/` | Invalidate the current token pair |
//! | POST   | `/auth/forgot_password/` | Send a reset OTP to an email |
//! | POST   | `/auth/verify_otp/` | Verify the 4-digit reset code |
//! | POST   | `/auth/reset_password/` | Set a new password after verification |

use serde::Serialize;

use synd_core::{AccountRole, Email, OtpCode};

use crate::error::{status_error, ApiError};
use crate::types::TokenPair;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequest<'a> {
    role: AccountRole,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    email: &'a str,
    otp: &'a str,
    new_password: &'a str,
}

/// Client for the platform authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl AuthClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Exchange credentials for a bearer token pair.
    ///
    /// Calls `POST {base_url}/auth/login/`.
    pub async fn login(&self, email: &Email, password: &str) -> Result<TokenPair, ApiError> {
        let endpoint = "POST /auth/login/";
        let url = format!("{}auth/login/", self.base_url);
        let req = LoginRequest {
            email: email.as_str(),
            password,
        };

        let resp = self
            .http
            .post(&url)
            .json(&req)
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

    /// Create an account for the role selected on the previous screen.
    ///
    /// Calls `POST {base_url}/auth/signup/`.
    pub async fn signup(
        &self,
        role: AccountRole,
        email: &Email,
        password: &str,
    ) -> Result<TokenPair, ApiError> {
        let endpoint = "POST /auth/signup/";
        let url = format!("{}auth/signup/", self.base_url);
        let req = SignupRequest {
            role,
            email: email.as_str(),
            password,
        };

        let resp = self
            .http
            .post(&url)
            .json(&req)
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

    /// Invalidate the current token pair server-side.
    ///
    /// Calls `POST {base_url}/auth/logout/`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let endpoint = "POST /auth/logout/";
        let url = format!("{}auth/logout/", self.base_url);

        let resp = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(status_error(endpoint, resp).await);
        }

        Ok(())
    }

    /// Request a password-reset OTP for the given email.
    ///
    /// Calls `POST {base_url}/auth/forgot_password/`. The backend responds
    /// success even for unknown addresses, so a clean return only means
    /// "the email was dispatched if the account exists".
    pub async fn forgot_password(&self, email: &Email) -> Result<(), ApiError> {
        let endpoint = "POST /auth/forgot_password/";
        let url = format!("{}auth/forgot_password/", self.base_url);
        let req = ForgotPasswordRequest {
            email: email.as_str(),
        };

        let resp = self
            .http
            .post(&url)
            .json(&req)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(status_error(endpoint, resp).await);
        }

        Ok(())
    }

    /// Verify a 4-digit reset code against the email it was sent to.
    ///
    /// Calls `POST {base_url}/auth/verify_otp/` with `{email, otp}` —
    /// exactly one request per invocation.
    pub async fn verify_otp(&self, email: &Email, otp: &OtpCode) -> Result<(), ApiError> {
        let endpoint = "POST /auth/verify_otp/";
        let url = format!("{}auth/verify_otp/", self.base_url);
        let req = VerifyOtpRequest {
            email: email.as_str(),
            otp: otp.as_str(),
        };

        let resp = self
            .http
            .post(&url)
            .json(&req)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(status_error(endpoint, resp).await);
        }

        Ok(())
    }

    /// Set a new password using a verified email/OTP pair.
    ///
    /// Calls `POST {base_url}/auth/reset_password/`.
    pub async fn reset_password(
        &self,
        email: &Email,
        otp: &OtpCode,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let endpoint = "POST /auth/reset_password/";
        let url = format!("{}auth/reset_password/", self.base_url);
        let req = ResetPasswordRequest {
            email: email.as_str(),
            otp: otp.as_str(),
            new_password,
        };

        let resp = self
            .http
            .post(&url)
            .json(&req)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(status_error(endpoint, resp).await);
        }

        Ok(())
    }
}

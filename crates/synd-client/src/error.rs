//! Platform API client error types.
//!
//! The taxonomy mirrors how failures must be surfaced to a user:
//! expected-absence (a read finding nothing) is NOT represented here — read
//! operations return `Ok(None)` for it. Everything else is an [`ApiError`]
//! variant that the flow layer renders inline: transport errors offer a
//! retry, validation errors attach to their fields, auth errors redirect
//! to re-authentication, and payment-processor messages pass through
//! verbatim.

use synd_core::FieldViolation;

/// Errors from platform API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP transport error (connection failure, timeout). Transient —
    /// the caller may offer a retry without losing entered data.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The API returned a non-2xx status without structured field errors.
    #[error("platform API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The API rejected the request with per-field validation messages.
    #[error("platform API {endpoint} rejected the request: {message}")]
    Validation {
        endpoint: String,
        /// Field-level messages, surfaced next to their inputs.
        violations: Vec<FieldViolation>,
        /// Form-level message when the backend supplied one.
        message: String,
    },

    /// Missing or expired credential. Fatal to the current action; the
    /// caller must redirect to re-authentication.
    #[error("authentication required for {endpoint}")]
    AuthRequired { endpoint: String },

    /// The payment processor declined or failed; its human-readable
    /// message is relayed verbatim.
    #[error("payment processor error at {endpoint}: {message}")]
    Processor { endpoint: String, message: String },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl ApiError {
    /// Whether this failure is transient and worth a user-triggered retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Whether this failure requires re-authentication.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthRequired { .. })
    }
}

/// Map a non-2xx response to the matching [`ApiError`] variant.
///
/// Consumes the response body. Recognized shapes:
/// - `401`/`403` → [`ApiError::AuthRequired`]
/// - any status with a `processorMessage` key → [`ApiError::Processor`]
/// - `400`/`422` with `{field: ["msg", ...]}` entries →
///   [`ApiError::Validation`] with one violation per field message
/// - anything else → [`ApiError::Api`] with the raw body
pub(crate) async fn status_error(endpoint: &str, resp: reqwest::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return ApiError::AuthRequired {
            endpoint: endpoint.to_string(),
        };
    }

    let parsed: Option<serde_json::Value> = serde_json::from_str(&body).ok();

    if let Some(message) = parsed.as_ref().and_then(processor_message) {
        return ApiError::Processor {
            endpoint: endpoint.to_string(),
            message,
        };
    }

    if status == reqwest::StatusCode::BAD_REQUEST
        || status == reqwest::StatusCode::UNPROCESSABLE_ENTITY
    {
        if let Some(object) = parsed.as_ref().and_then(|v| v.as_object()) {
            let (violations, message) = field_violations(object);
            if !violations.is_empty() || !message.is_empty() {
                return ApiError::Validation {
                    endpoint: endpoint.to_string(),
                    violations,
                    message,
                };
            }
        }
    }

    ApiError::Api {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body,
    }
}

fn processor_message(value: &serde_json::Value) -> Option<String> {
    value
        .get("processorMessage")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

/// Split a DRF-style error object into per-field violations and a
/// form-level message. `detail` and `nonFieldErrors` feed the form-level
/// message; every other key is treated as a field name whose value is a
/// message or a list of messages.
fn field_violations(
    object: &serde_json::Map<String, serde_json::Value>,
) -> (Vec<FieldViolation>, String) {
    let mut violations = Vec::new();
    let mut general = Vec::new();

    for (key, value) in object {
        let messages: Vec<String> = match value {
            serde_json::Value::String(s) => vec![s.clone()],
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|i| i.as_str())
                .map(|s| s.to_string())
                .collect(),
            _ => continue,
        };

        if key == "detail" || key == "nonFieldErrors" {
            general.extend(messages);
        } else {
            violations.extend(
                messages
                    .into_iter()
                    .map(|message| FieldViolation::new(key.clone(), message)),
            );
        }
    }

    let message = if general.is_empty() {
        if violations.is_empty() {
            String::new()
        } else {
            "validation failed".to_string()
        }
    } else {
        general.join("; ")
    };

    (violations, message)
}

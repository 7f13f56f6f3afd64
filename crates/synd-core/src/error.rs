//! # Error Hierarchy
//!
//! Structured error types for local validation, built with `thiserror`.
//! Each variant carries the offending input and the expected format so that
//! a form layer can render an actionable message without guesswork.

use thiserror::Error;

/// Validation errors for domain primitives and form fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email address does not have a `local@domain.tld` shape.
    #[error("invalid email address: \"{0}\"")]
    InvalidEmail(String),

    /// One-time passcode is not exactly four digits.
    #[error("invalid verification code: \"{0}\" (expected 4 digits)")]
    InvalidOtp(String),

    /// Password is shorter than the platform minimum.
    #[error("password too short (minimum {minimum} characters)")]
    PasswordTooShort {
        /// The configured minimum length.
        minimum: usize,
    },

    /// Password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// A required field was left empty.
    #[error("{field} is required")]
    MissingField {
        /// The field that was left empty.
        field: String,
    },

    /// Account role string is not one the platform recognizes.
    #[error("unknown account role: \"{0}\" (expected \"investor\" or \"lead\")")]
    UnknownRole(String),
}

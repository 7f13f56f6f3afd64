//! # Field Validation Primitives
//!
//! Construction-validated newtypes and check functions used by the wizard
//! flows before any network call is made. A step that fails these checks
//! stays local: violations produce inline messages and zero requests.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum password length accepted by the platform.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A field-level validation violation, suitable for inline rendering next
/// to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The wire name of the field the message belongs to.
    pub field: String,
    /// Human-readable message for the field.
    pub message: String,
}

impl FieldViolation {
    /// Build a violation for `field` with the given message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// An email address.
///
/// Validation is intentionally shallow — one `@`, non-empty local part,
/// and a domain containing a dot. The backend owns deliverability; this
/// check only catches obvious typos before a request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create an email address, validating shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] when the value does not
    /// look like `local@domain.tld`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(ValidationError::InvalidEmail(s));
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(ValidationError::InvalidEmail(s));
        }
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return Err(ValidationError::InvalidEmail(s));
        };
        if host.is_empty() || tld.is_empty() {
            return Err(ValidationError::InvalidEmail(s));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Access the email string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-time passcode as delivered by the password-reset email.
///
/// # Validation
///
/// - Must be exactly 4 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OtpCode(String);

impl OtpCode {
    /// Create a passcode, validating the 4-digit format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOtp`] if the string is not
    /// exactly 4 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidOtp(s));
        }
        Ok(Self(s))
    }

    /// Access the passcode string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a password against the platform length policy.
///
/// # Errors
///
/// Returns [`ValidationError::PasswordTooShort`] when under
/// [`MIN_PASSWORD_LEN`] characters.
pub fn password_policy(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            minimum: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Cross-field check for a password and its confirmation.
///
/// # Errors
///
/// Returns [`ValidationError::PasswordTooShort`] or
/// [`ValidationError::PasswordMismatch`].
pub fn password_pair(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    password_policy(password)?;
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Required-ness check: a trimmed-empty value yields a [`FieldViolation`]
/// naming the field.
pub fn require(field: &str, value: &str) -> Option<FieldViolation> {
    if value.trim().is_empty() {
        Some(FieldViolation::new(
            field,
            ValidationError::MissingField {
                field: field.to_string(),
            }
            .to_string(),
        ))
    } else {
        None
    }
}

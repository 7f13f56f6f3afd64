//! # Attachment Policy
//!
//! Pre-upload validation for file fields (proof of bank ownership,
//! government ID, entity logo, supporting policy documents). Violations are
//! rejected before any network call, with a message naming the configured
//! limit or the allowed types.

use thiserror::Error;

/// Default upload ceiling: 5 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default extension allow-list for supporting documents.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

/// Errors from pre-upload attachment validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    /// File exceeds the configured byte ceiling.
    #[error("file is {actual} bytes; the limit is {limit} bytes ({limit_mib} MiB)")]
    TooLarge {
        /// Size of the rejected file.
        actual: u64,
        /// The configured ceiling in bytes.
        limit: u64,
        /// The ceiling expressed in whole MiB, for the user-facing message.
        limit_mib: u64,
    },

    /// File extension is not on the allow-list.
    #[error("\"{file_name}\" is not an accepted file type (allowed: {allowed})")]
    DisallowedExtension {
        /// Name of the rejected file.
        file_name: String,
        /// Comma-joined allow-list, for the user-facing message.
        allowed: String,
    },
}

/// Size ceiling and extension allow-list applied to a file before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPolicy {
    /// Maximum accepted file size in bytes.
    pub max_bytes: u64,
    /// Lowercase extensions (without the dot) the platform accepts.
    pub allowed_extensions: Vec<String>,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl AttachmentPolicy {
    /// Build a policy with an explicit ceiling and allow-list.
    pub fn new(max_bytes: u64, allowed_extensions: &[&str]) -> Self {
        Self {
            max_bytes,
            allowed_extensions: allowed_extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Check a candidate file against the policy.
    ///
    /// The extension comparison is case-insensitive; a file with no
    /// extension fails the allow-list check.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::TooLarge`] or
    /// [`AttachmentError::DisallowedExtension`] with a message naming the
    /// configured limit or the allowed types.
    pub fn check(&self, file_name: &str, len: u64) -> Result<(), AttachmentError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if extension.is_empty() || !self.allowed_extensions.iter().any(|e| *e == extension) {
            return Err(AttachmentError::DisallowedExtension {
                file_name: file_name.to_string(),
                allowed: self.allowed_extensions.join(", "),
            });
        }

        if len > self.max_bytes {
            return Err(AttachmentError::TooLarge {
                actual: len,
                limit: self.max_bytes,
                limit_mib: self.max_bytes / (1024 * 1024),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_accepts_small_pdf() {
        let policy = AttachmentPolicy::default();
        assert!(policy.check("proof.pdf", 1024).is_ok());
    }

    #[test]
    fn oversize_file_names_the_limit() {
        let policy = AttachmentPolicy::default();
        let err = policy.check("proof.pdf", 6 * 1024 * 1024).unwrap_err();
        match &err {
            AttachmentError::TooLarge { limit, limit_mib, .. } => {
                assert_eq!(*limit, DEFAULT_MAX_BYTES);
                assert_eq!(*limit_mib, 5);
            }
            other => panic!("expected TooLarge, got: {other:?}"),
        }
        assert!(err.to_string().contains("5 MiB"));
    }

    #[test]
    fn disallowed_extension_names_the_allow_list() {
        let policy = AttachmentPolicy::default();
        let err = policy.check("malware.exe", 10).unwrap_err();
        assert!(err.to_string().contains("pdf"));
        assert!(matches!(err, AttachmentError::DisallowedExtension { .. }));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let policy = AttachmentPolicy::default();
        assert!(policy.check("SCAN.PDF", 10).is_ok());
        assert!(policy.check("photo.JpEg", 10).is_ok());
    }

    #[test]
    fn missing_extension_is_rejected() {
        let policy = AttachmentPolicy::default();
        assert!(policy.check("noextension", 10).is_err());
        assert!(policy.check("trailingdot.", 10).is_err());
    }

    #[test]
    fn boundary_size_is_accepted() {
        let policy = AttachmentPolicy::new(100, &["pdf"]);
        assert!(policy.check("a.pdf", 100).is_ok());
        assert!(policy.check("a.pdf", 101).is_err());
    }
}

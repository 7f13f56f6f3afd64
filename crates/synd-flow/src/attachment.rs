//! # Attachment Field
//!
//! The file field of a step distinguishes three states: empty, an
//! existing remote reference from a hydrated draft, and a newly selected
//! local file awaiting upload. Keeping an existing file means sending
//! nothing for the field; only an explicit [`AttachmentField::remove`]
//! clears it.
//!
//! Selection is policy-gated: an oversized or wrongly-typed file is
//! rejected before any network call with a message naming the limit or
//! the allowed types, and the field keeps its previous state — a rejected
//! file is never silently retained.

use std::path::Path;

use synd_client::FileUpload;
use synd_core::{AttachmentError, AttachmentPolicy};

/// What the field currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentState {
    /// Nothing uploaded, nothing selected.
    Empty,
    /// The hydrated draft carries a remote reference; submitting without
    /// a new selection leaves it untouched.
    ExistingRemote {
        /// The stored file's URL.
        url: String,
    },
    /// A local file passed the policy check and awaits upload.
    NewLocal {
        /// Original file name.
        file_name: String,
        /// Raw file content.
        bytes: Vec<u8>,
    },
}

/// Errors from selecting a file into the field.
#[derive(Debug, thiserror::Error)]
pub enum AttachmentSelectError {
    /// The file violates the upload policy.
    #[error(transparent)]
    Policy(#[from] AttachmentError),

    /// The file could not be read from disk.
    #[error("could not read \"{path}\": {source}")]
    Io {
        /// The path that failed.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// One step's file field, bound to its wire name and upload policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentField {
    field: String,
    policy: AttachmentPolicy,
    state: AttachmentState,
}

impl AttachmentField {
    /// An empty field with the given wire name and policy.
    pub fn new(field: impl Into<String>, policy: AttachmentPolicy) -> Self {
        Self {
            field: field.into(),
            policy,
            state: AttachmentState::Empty,
        }
    }

    /// The wire name of the field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The current state.
    pub fn state(&self) -> &AttachmentState {
        &self.state
    }

    /// Adopt a remote reference from a hydrated draft.
    pub fn hydrate_remote(&mut self, url: impl Into<String>) {
        self.state = AttachmentState::ExistingRemote { url: url.into() };
    }

    /// Select a local file, enforcing the policy first.
    ///
    /// # Errors
    ///
    /// Returns the policy violation and leaves the previous state in
    /// place (an existing remote reference survives a rejected
    /// replacement attempt).
    pub fn select_file(
        &mut self,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), AttachmentError> {
        let file_name = file_name.into();
        self.policy.check(&file_name, bytes.len() as u64)?;
        self.state = AttachmentState::NewLocal { file_name, bytes };
        Ok(())
    }

    /// Select a file from disk, checking the policy against its metadata
    /// before reading the content.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentSelectError::Policy`] on a policy violation or
    /// [`AttachmentSelectError::Io`] when the file cannot be read. The
    /// previous state is left in place either way.
    pub fn select_path(&mut self, path: &Path) -> Result<(), AttachmentSelectError> {
        let display = path.display().to_string();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.clone());

        let metadata = std::fs::metadata(path).map_err(|source| AttachmentSelectError::Io {
            path: display.clone(),
            source,
        })?;
        self.policy.check(&file_name, metadata.len())?;

        let bytes = std::fs::read(path).map_err(|source| AttachmentSelectError::Io {
            path: display,
            source,
        })?;
        self.state = AttachmentState::NewLocal { file_name, bytes };
        Ok(())
    }

    /// Explicitly clear the field. This is the only path that drops an
    /// existing remote reference.
    pub fn remove(&mut self) {
        self.state = AttachmentState::Empty;
    }

    /// The upload to send with the next persist: `Some` only for a newly
    /// selected local file. An existing remote reference (or an empty
    /// field) contributes nothing to the wire.
    pub fn pending_upload(&self) -> Option<FileUpload> {
        match &self.state {
            AttachmentState::NewLocal { file_name, bytes } => Some(FileUpload::new(
                self.field.clone(),
                file_name.clone(),
                bytes.clone(),
            )),
            AttachmentState::Empty | AttachmentState::ExistingRemote { .. } => None,
        }
    }
}

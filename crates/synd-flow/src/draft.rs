//! # Draft Record
//!
//! The in-progress, partially-complete representation of a domain entity
//! being built across a multi-step flow. The record is backend-owned; the
//! client holds a transient cached copy for the editing session.
//!
//! Create-vs-update is not a mutable "have I seen a draft" flag: the
//! record is a tagged variant, and the persist path pattern-matches on
//! it. Once [`DraftRecord::Saved`], the id is stable — every subsequent
//! step submission targets it, and rebinding to a different id is a typed
//! error (it would fork the draft server-side).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use synd_client::DraftFields;

use crate::error::FlowError;

/// Flow-level record identifier. Adapters convert to and from the
/// resource-specific newtypes at the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a record identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A draft record: unsaved until the first successful persist, saved with
/// a stable id thereafter.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftRecord {
    /// No backend record exists yet; the next persist creates one.
    Unsaved {
        /// Locally accumulated field values.
        fields: DraftFields,
    },
    /// A backend record exists; the next persist updates it in place.
    Saved {
        /// The stable backend-assigned identifier.
        id: RecordId,
        /// The cached field values, possibly stale.
        fields: DraftFields,
    },
}

impl DraftRecord {
    /// An empty, unsaved draft (the first-visit default).
    pub fn unsaved() -> Self {
        Self::Unsaved {
            fields: DraftFields::new(),
        }
    }

    /// A draft hydrated from an existing backend record.
    pub fn saved(id: RecordId, fields: DraftFields) -> Self {
        Self::Saved { id, fields }
    }

    /// The stable id, if one has been assigned.
    pub fn id(&self) -> Option<RecordId> {
        match self {
            Self::Unsaved { .. } => None,
            Self::Saved { id, .. } => Some(*id),
        }
    }

    /// The cached field values.
    pub fn fields(&self) -> &DraftFields {
        match self {
            Self::Unsaved { fields } | Self::Saved { fields, .. } => fields,
        }
    }

    /// Fold a step's submitted fields into the cache. Existing keys not
    /// present in the update are preserved, mirroring the backend's
    /// partial-update semantics.
    pub fn merge(&mut self, update: &DraftFields) {
        let fields = match self {
            Self::Unsaved { fields } | Self::Saved { fields, .. } => fields,
        };
        for (key, value) in update {
            fields.insert(key.clone(), value.clone());
        }
    }

    /// Adopt the id assigned by a successful create.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::IdRebound`] if the draft already holds a
    /// different id.
    pub fn mark_saved(&mut self, id: RecordId) -> Result<(), FlowError> {
        match self {
            Self::Unsaved { fields } => {
                let fields = std::mem::take(fields);
                *self = Self::Saved { id, fields };
                Ok(())
            }
            Self::Saved { id: existing, .. } if *existing == id => Ok(()),
            Self::Saved { id: existing, .. } => Err(FlowError::IdRebound {
                existing: *existing,
                incoming: id,
            }),
        }
    }
}

impl Default for DraftRecord {
    fn default() -> Self {
        Self::unsaved()
    }
}

//! # Identifier Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the client stack.
//! Each identifier is a distinct type — you cannot pass a [`ProfileId`]
//! where an [`SpvId`] is expected.
//!
//! All identifiers are UUID-backed and always valid by construction. They
//! serialize as the bare wire UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A unique identifier for an investor onboarding profile draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Create a new random profile identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a profile identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a syndicate entity draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyndicateId(Uuid);

impl SyndicateId {
    /// Create a new random syndicate identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a syndicate identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SyndicateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SyndicateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a special-purpose vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpvId(Uuid);

impl SpvId {
    /// Create a new random SPV identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an SPV identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SpvId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SpvId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for an investment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvestmentId(Uuid);

impl InvestmentId {
    /// Create a new random investment identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an investment identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InvestmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvestmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for an uploaded supporting document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Create a new random document identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a document identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role a user selects before sign-up. Carried across the
/// role-selection → sign-up navigation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// A passive investor joining syndicate deals.
    Investor,
    /// A syndicate lead raising SPVs.
    Lead,
}

impl AccountRole {
    /// Parse a role from its wire string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownRole`] for anything other than
    /// `investor` or `lead`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "investor" => Ok(Self::Investor),
            "lead" => Ok(Self::Lead),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }

    /// The wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Lead => "lead",
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

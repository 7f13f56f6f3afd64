//! # Wire Types
//!
//! Records as returned by the platform API. Fields use `#[serde(default)]`
//! for resilience against schema evolution; the backend may return fields
//! not modeled here, so `serde(deny_unknown_fields)` is intentionally NOT
//! used. Step-owned draft fields are captured in a flattened ordered map —
//! one record type serves every step of its flow.
//!
//! Identifier newtypes are re-exported from [`synd_core`] so downstream
//! consumers use the same typed identifiers as the rest of the stack.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use synd_core::{DocumentId, InvestmentId, ProfileId, SpvId, SyndicateId};

/// The sparse field map of a draft record: wire field name → value.
/// Ordered for deterministic serialization.
pub type DraftFields = BTreeMap<String, serde_json::Value>;

// -- Typed enums matching platform API values ---------------------------------

/// Onboarding profile status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    /// Forward-compatible catch-all for statuses the API introduces after
    /// this client version is deployed.
    #[serde(other)]
    Unknown,
}

/// Syndicate entity status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyndicateStatus {
    Draft,
    Active,
    Suspended,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// SPV lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpvStatus {
    Draft,
    Raising,
    Closed,
    Cancelled,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// Investment request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    Pending,
    Approved,
    Rejected,
    Funded,
    Settled,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

// -- Records ------------------------------------------------------------------

/// An investor onboarding profile draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: ProfileId,
    #[serde(default)]
    pub status: Option<ProfileStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Step-owned draft fields (personal details, bank details, file
    /// references as remote URLs), keyed by wire name.
    #[serde(flatten)]
    pub fields: DraftFields,
}

/// A syndicate entity draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyndicateRecord {
    pub id: SyndicateId,
    #[serde(default)]
    pub status: Option<SyndicateStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: DraftFields,
}

/// A special-purpose-vehicle draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpvRecord {
    pub id: SpvId,
    #[serde(default)]
    pub status: Option<SpvStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: DraftFields,
}

/// An investment request against an SPV.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub id: InvestmentId,
    #[serde(default)]
    pub spv_id: Option<SpvId>,
    /// Decimal amount as a string, exactly as the backend serializes it.
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<InvestmentStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: DraftFields,
}

/// Bearer credential pair returned by login/sign-up.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Result of a payment-intent confirmation relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub intent_id: Option<String>,
}

#![deny(missing_docs)]

//! # synd-core — Foundational Types for the Syndicate Platform Client Stack
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, and `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`SpvId`] where a [`ProfileId`] is
//!    expected.
//!
//! 2. **Validation at construction.** String-based primitives ([`Email`],
//!    [`OtpCode`]) reject malformed input when built, so downstream code
//!    never re-checks them.
//!
//! 3. **[`ValidationError`] hierarchy.** Structured errors with `thiserror`
//!    that carry the offending input and the expected format — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod attachment;
pub mod error;
pub mod identity;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use attachment::{AttachmentError, AttachmentPolicy};
pub use error::ValidationError;
pub use identity::{AccountRole, DocumentId, InvestmentId, ProfileId, SpvId, SyndicateId};
pub use validate::{password_pair, password_policy, require, Email, FieldViolation, OtpCode};

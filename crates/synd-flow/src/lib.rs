//! # synd-flow — Wizard Engine for the Syndicate Platform Client Stack
//!
//! Every multi-step flow on the platform (investor onboarding, syndicate
//! creation, SPV creation, password reset) is the same machine: an ordered
//! step registry, a backend-owned draft record persisted between steps,
//! and a per-step lifecycle of hydrate → edit → validate → submit →
//! advance. This crate implements that machine once; flows instantiate it
//! with their field sets and persistence bindings instead of re-building
//! it per screen.
//!
//! ## Components
//!
//! - [`registry`] — static step descriptors and router-aware lookup.
//!   Unknown step ids are a no-op, never a crash.
//! - [`draft`] — the draft record as a tagged variant:
//!   [`DraftRecord::Unsaved`] before the first persist,
//!   [`DraftRecord::Saved`] with a stable id thereafter. Create-vs-update
//!   is pattern matching on that tag, not a mutable boolean.
//! - [`store`] — the async persistence seam ([`DraftStore`]) and its
//!   bindings to the platform sub-clients.
//! - [`controller`] — the step lifecycle state machine
//!   (`Hydrating → Ready → Validating → Submitting → Advancing | Failed`)
//!   with an explicit in-flight guard: a duplicate trigger while a
//!   submission is on the wire performs zero network calls.
//! - [`session`] — typed credential holder; a missing credential is a
//!   user-visible redirect to re-authentication, never a silently failed
//!   request.
//! - [`handoff`] — typed, consume-once slots for values that cross one
//!   navigation boundary (reset email, selected role, in-progress SPV
//!   id). Scoped to the flow object; cleared on consume and on reset.
//! - [`attachment`] — the tri-state file field (empty / existing remote /
//!   newly selected local) gated by the pre-upload policy.
//! - [`password_reset`] — the forgot → verify-OTP → set-new-password
//!   orchestration.

pub mod attachment;
pub mod controller;
pub mod draft;
pub mod error;
pub mod handoff;
pub mod password_reset;
pub mod registry;
pub mod session;
pub mod store;

pub use attachment::{AttachmentField, AttachmentSelectError, AttachmentState};
pub use controller::{StepController, StepForm, StepPhase, SubmitOutcome};
pub use draft::{DraftRecord, RecordId};
pub use error::FlowError;
pub use handoff::{
    Handoff, OtpVerifiedHandoff, PasswordResetHandoff, RoleSelectionHandoff, SpvDraftHandoff,
};
pub use password_reset::PasswordResetFlow;
pub use registry::{StepDescriptor, StepRegistry};
pub use session::SessionContext;
pub use store::{DraftStore, ProfileDraftStore, SpvDraftStore, SyndicateDraftStore};

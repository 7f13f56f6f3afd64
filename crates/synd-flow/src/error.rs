//! Flow-level error types.
//!
//! Everything a step view can surface inline lives here. Backend failures
//! arrive wrapped as [`FlowError::Api`]; the flow never silently advances
//! on a partial failure and never discards entered data on any failure
//! path — callers keep their form state and re-submit.

use synd_core::FieldViolation;

use crate::controller::StepPhase;
use crate::draft::RecordId;

/// Errors from flow orchestration.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// No stored credential. Fatal to the current action; redirect to
    /// re-authentication, preserving in-progress form values.
    #[error("no stored credential; sign in to continue")]
    AuthRequired,

    /// Submission was attempted before the step finished hydrating or
    /// while another phase owns the controller.
    #[error("step \"{step}\" cannot submit while {phase:?}")]
    NotReady {
        /// The step that refused the submission.
        step: String,
        /// The phase the controller was in.
        phase: StepPhase,
    },

    /// A destination step was entered without the handoff state it
    /// requires. The caller must redirect to the fallback route without
    /// rendering the destination.
    #[error("cannot enter \"{destination}\" without handoff state; returning to \"{fallback}\"")]
    MissingHandoff {
        /// Route of the step that was refused.
        destination: &'static str,
        /// Route the caller must fall back to.
        fallback: &'static str,
    },

    /// A draft that already holds a stable id was asked to adopt a
    /// different one. Allowing this would fork the draft server-side.
    #[error("draft already saved as {existing}; refusing to rebind to {incoming}")]
    IdRebound {
        /// The id assigned at the first persist.
        existing: RecordId,
        /// The conflicting id.
        incoming: RecordId,
    },

    /// Local, pre-flight validation failed. No network call was made.
    #[error("local validation failed ({} field(s))", violations.len())]
    Invalid {
        /// Per-field messages for inline rendering.
        violations: Vec<FieldViolation>,
    },

    /// A flow referenced a step id its registry does not contain.
    #[error("flow has no step \"{step}\"")]
    UnknownStep {
        /// The unresolvable step id.
        step: String,
    },

    /// A backend call failed; see the wrapped taxonomy for how to surface
    /// it (transient retry, per-field messages, re-authentication).
    #[error(transparent)]
    Api(#[from] synd_client::ApiError),
}

impl FlowError {
    /// Whether the action should retry after re-authentication.
    pub fn is_auth(&self) -> bool {
        match self {
            Self::AuthRequired => true,
            Self::Api(e) => e.is_auth(),
            _ => false,
        }
    }
}

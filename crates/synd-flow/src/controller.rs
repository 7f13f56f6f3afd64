//! # Step Controller
//!
//! The per-step lifecycle state machine, implemented once and
//! instantiated for every step of every flow:
//!
//! ```text
//! Hydrating ──▶ Ready ──▶ Validating ──▶ Submitting ──▶ Advancing
//!     │           ▲           │              │
//!     │           └───────────┘ (violations) │
//!     └──▶ Failed ◀──────────────────────────┘
//!            │
//!            └──▶ hydrate()/submit() again (retry, data retained)
//! ```
//!
//! Invariants:
//! - Hydration completes before submission is possible; a submit during
//!   `Hydrating` is refused with a typed error.
//! - Local validation violations return to `Ready` with per-field
//!   messages and make no network call.
//! - At most one persist is in flight per controller: a duplicate
//!   trigger returns [`SubmitOutcome::InFlight`] and performs zero
//!   network calls. The guard is an atomic flag, not a disabled button.
//! - Failure keeps every entered value: the form is the caller's, the
//!   cached draft is untouched, and `Failed` is re-entrant — invoking
//!   `hydrate` or `submit` again is the retry affordance.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use synd_client::{ApiError, DraftFields, FileUpload};
use synd_core::FieldViolation;

use crate::attachment::AttachmentField;
use crate::draft::DraftRecord;
use crate::error::FlowError;
use crate::registry::{StepDescriptor, StepRegistry};
use crate::store::DraftStore;

/// The lifecycle phase of a step view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Fetching the draft on entry; the submit control is not yet live.
    Hydrating,
    /// User edits fields; no network activity.
    Ready,
    /// Running local, synchronous field constraints.
    Validating,
    /// A persist is on the wire; further triggers are refused.
    Submitting,
    /// Persist succeeded; the flow moves to the next step's route.
    Advancing,
    /// Hydration or persist failed; re-entrant for retry.
    Failed,
}

/// One step's form contract: the field subset it validates and persists.
pub trait StepForm {
    /// Local, synchronous constraints (required-ness, format, cross-field
    /// equality). Empty means valid.
    fn validate(&self) -> Vec<FieldViolation>;

    /// The fields this step submits. Unchanged file fields must be
    /// absent — an empty placeholder would clear them server-side.
    fn fields(&self) -> DraftFields;

    /// The step's file field, when it has one.
    fn attachment(&self) -> Option<&AttachmentField> {
        None
    }
}

/// Outcome of a submit trigger.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Persist succeeded; navigate to `next` (or finish the flow when
    /// `None`).
    Advanced {
        /// The following step, if the flow continues.
        next: Option<StepDescriptor>,
    },
    /// Local validation rejected the form; no network call was made.
    Rejected {
        /// Per-field messages for inline rendering.
        violations: Vec<FieldViolation>,
    },
    /// Another submission is already on the wire; this trigger made no
    /// network call.
    InFlight,
}

/// Clears the in-flight flag on every exit path, await points included.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The generic step-view controller. Per-step variation is confined to
/// the [`DraftStore`] binding and the [`StepForm`] it is handed.
pub struct StepController<S> {
    store: S,
    registry: StepRegistry,
    step_id: &'static str,
    phase: Mutex<StepPhase>,
    draft: Mutex<DraftRecord>,
    violations: Mutex<Vec<FieldViolation>>,
    in_flight: AtomicBool,
}

impl<S: DraftStore> StepController<S> {
    /// Create a controller for a step that still needs hydration.
    pub fn new(store: S, registry: StepRegistry, step_id: &'static str) -> Self {
        Self {
            store,
            registry,
            step_id,
            phase: Mutex::new(StepPhase::Hydrating),
            draft: Mutex::new(DraftRecord::unsaved()),
            violations: Mutex::new(Vec::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Create a controller resuming with a draft carried forward from the
    /// previous step — the id assigned at the first persist stays with
    /// the flow instance instead of being re-fetched per step.
    pub fn resume(
        store: S,
        registry: StepRegistry,
        step_id: &'static str,
        draft: DraftRecord,
    ) -> Self {
        Self {
            store,
            registry,
            step_id,
            phase: Mutex::new(StepPhase::Ready),
            draft: Mutex::new(draft),
            violations: Mutex::new(Vec::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The step this controller drives.
    pub fn step(&self) -> Option<&StepDescriptor> {
        self.registry.get(self.step_id)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> StepPhase {
        *self.phase.lock()
    }

    /// Snapshot of the cached draft.
    pub fn draft(&self) -> DraftRecord {
        self.draft.lock().clone()
    }

    /// Field-level messages from the last validation or submit failure.
    pub fn violations(&self) -> Vec<FieldViolation> {
        self.violations.lock().clone()
    }

    /// Fetch the draft and populate the form's backing state.
    ///
    /// "No draft yet" is normal and leaves defaults in place. An abnormal
    /// failure moves to `Failed` with the error surfaced — but the
    /// (empty) form stays usable for first-time entry, and calling
    /// `hydrate` again is the retry affordance.
    pub async fn hydrate(&self) -> Result<(), FlowError> {
        *self.phase.lock() = StepPhase::Hydrating;

        match self.store.fetch().await {
            Ok(Some((id, fields))) => {
                tracing::debug!(step = self.step_id, %id, "hydrated existing draft");
                *self.draft.lock() = DraftRecord::saved(id, fields);
                *self.phase.lock() = StepPhase::Ready;
                Ok(())
            }
            Ok(None) => {
                tracing::debug!(step = self.step_id, "no draft yet, using defaults");
                *self.phase.lock() = StepPhase::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(step = self.step_id, error = %e, "hydration failed");
                *self.phase.lock() = StepPhase::Failed;
                Err(e.into())
            }
        }
    }

    /// Validate and persist one step's fields, then advance.
    ///
    /// See the module docs for the state walk. The atomic in-flight guard
    /// makes the no-duplicate-submission property hold even when two
    /// triggers race: the loser returns [`SubmitOutcome::InFlight`]
    /// without touching the wire.
    pub async fn submit<F: StepForm + Sync>(&self, form: &F) -> Result<SubmitOutcome, FlowError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Ok(SubmitOutcome::InFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let phase = *self.phase.lock();
        if !matches!(phase, StepPhase::Ready | StepPhase::Failed) {
            return Err(FlowError::NotReady {
                step: self.step_id.to_string(),
                phase,
            });
        }

        *self.phase.lock() = StepPhase::Validating;
        let violations = form.validate();
        if !violations.is_empty() {
            *self.violations.lock() = violations.clone();
            *self.phase.lock() = StepPhase::Ready;
            return Ok(SubmitOutcome::Rejected { violations });
        }
        self.violations.lock().clear();

        *self.phase.lock() = StepPhase::Submitting;
        let fields = form.fields();
        let file: Option<FileUpload> = form.attachment().and_then(|a| a.pending_upload());

        let existing = self.draft.lock().id();
        let persisted = match existing {
            None => self.store.create(&fields, file.as_ref()).await.map(Some),
            Some(id) => self
                .store
                .update(id, &fields, file.as_ref())
                .await
                .map(|()| None),
        };

        match persisted {
            Ok(assigned) => {
                {
                    let mut draft = self.draft.lock();
                    if let Some(id) = assigned {
                        draft.mark_saved(id)?;
                    }
                    draft.merge(&fields);
                }
                *self.phase.lock() = StepPhase::Advancing;
                let next = self.registry.next_after(self.step_id).copied();
                tracing::debug!(
                    step = self.step_id,
                    next = next.map(|s| s.id),
                    "step persisted, advancing"
                );
                Ok(SubmitOutcome::Advanced { next })
            }
            Err(e) => {
                if let ApiError::Validation { violations, .. } = &e {
                    *self.violations.lock() = violations.clone();
                }
                tracing::warn!(step = self.step_id, error = %e, "submit failed");
                *self.phase.lock() = StepPhase::Failed;
                Err(e.into())
            }
        }
    }
}

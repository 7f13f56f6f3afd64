//! # Handoff State
//!
//! Short-lived values that cross exactly one navigation boundary and do
//! not belong to the draft record: the email carried from
//! forgot-password to OTP verification, the role carried from
//! role-selection to sign-up, the in-progress SPV id carried between
//! wizard entries.
//!
//! Each value lives in a typed, consume-once [`Handoff`] slot owned by
//! its flow object — not in a process-wide untyped bag. The destination
//! takes the value on consumption; a flow's [`reset`](Handoff::clear) on
//! abandonment clears its slots, so a later, unrelated flow instance can
//! never observe stale state. A destination entered with its slot empty
//! must degrade gracefully: the flow returns the fallback route instead
//! of rendering the destination.

use parking_lot::Mutex;

use synd_core::{AccountRole, Email, OtpCode, SpvId};

/// A typed, consume-once slot for one handoff value.
#[derive(Debug, Default)]
pub struct Handoff<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Handoff<T> {
    /// An empty slot.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Write the value before navigating away. Overwrites any previous
    /// value — the latest navigation wins.
    pub fn set(&self, value: T) {
        *self.slot.lock() = Some(value);
    }

    /// Consume the value on destination mount. The slot is empty
    /// afterwards.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().take()
    }

    /// Whether a value is waiting.
    pub fn is_set(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Clear without consuming (flow abandonment).
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}

impl<T: Clone> Handoff<T> {
    /// Observe the value without consuming it (render guards).
    pub fn peek(&self) -> Option<T> {
        self.slot.lock().clone()
    }
}

/// Email awaiting OTP verification, set by the forgot-password step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetHandoff {
    /// The address the reset code was sent to.
    pub email: Email,
}

/// A verified email/OTP pair, set by the verification step and consumed
/// by set-new-password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpVerifiedHandoff {
    /// The verified address.
    pub email: Email,
    /// The verified code, replayed with the reset request.
    pub otp: OtpCode,
}

/// Role carried from role-selection to sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSelectionHandoff {
    /// The selected account role.
    pub role: AccountRole,
}

/// In-progress SPV id carried between wizard entries (resume).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpvDraftHandoff {
    /// The draft SPV being built.
    pub spv_id: SpvId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_the_value() {
        let slot: Handoff<RoleSelectionHandoff> = Handoff::new();
        slot.set(RoleSelectionHandoff {
            role: AccountRole::Investor,
        });
        assert!(slot.is_set());
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
        assert!(!slot.is_set());
    }

    #[test]
    fn peek_leaves_the_value_for_the_consumer() {
        let slot: Handoff<PasswordResetHandoff> = Handoff::new();
        slot.set(PasswordResetHandoff {
            email: Email::new("a@b.com").unwrap(),
        });
        assert!(slot.peek().is_some());
        assert!(slot.is_set());
    }

    #[test]
    fn latest_set_wins() {
        let slot: Handoff<SpvDraftHandoff> = Handoff::new();
        let first = SpvId::new();
        let second = SpvId::new();
        slot.set(SpvDraftHandoff { spv_id: first });
        slot.set(SpvDraftHandoff { spv_id: second });
        assert_eq!(slot.take().unwrap().spv_id, second);
    }

    #[test]
    fn clear_discards_without_consuming() {
        let slot: Handoff<OtpVerifiedHandoff> = Handoff::new();
        slot.set(OtpVerifiedHandoff {
            email: Email::new("a@b.com").unwrap(),
            otp: OtpCode::new("1234").unwrap(),
        });
        slot.clear();
        assert!(slot.take().is_none());
    }
}

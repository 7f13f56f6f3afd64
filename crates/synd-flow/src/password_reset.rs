//! # Password-Reset Flow
//!
//! The forgot → verify-OTP → set-new-password sequence, driven through
//! typed handoff slots instead of browser-global storage:
//!
//! 1. [`request`](PasswordResetFlow::request) sends the reset email and
//!    parks the address in the reset slot.
//! 2. [`verify`](PasswordResetFlow::verify) consumes that slot, issues
//!    exactly one verification call with `{email, otp}`, and on success
//!    parks the verified pair for the final step. Entering the OTP step
//!    with the slot empty is refused with the forgot-password fallback
//!    route — the OTP form is never rendered.
//! 3. [`complete`](PasswordResetFlow::complete) checks the new password
//!    pair locally, replays the verified email/OTP with the reset call,
//!    and clears every slot.
//!
//! A transient failure at any hop restores the consumed slot so the user
//! retries without restarting the sequence.
//! [`reset`](PasswordResetFlow::reset) clears both slots on abandonment.

use synd_client::PlatformClient;
use synd_core::{password_pair, Email, FieldViolation, OtpCode};

use crate::error::FlowError;
use crate::handoff::{Handoff, OtpVerifiedHandoff, PasswordResetHandoff};
use crate::registry::{self, StepDescriptor, StepRegistry};

/// Orchestrates the three-hop password reset.
pub struct PasswordResetFlow {
    client: PlatformClient,
    registry: StepRegistry,
    requested: Handoff<PasswordResetHandoff>,
    verified: Handoff<OtpVerifiedHandoff>,
}

impl PasswordResetFlow {
    /// Build the flow on an (anonymous) platform client.
    pub fn new(client: PlatformClient) -> Self {
        Self {
            client,
            registry: registry::password_reset(),
            requested: Handoff::new(),
            verified: Handoff::new(),
        }
    }

    /// The flow's step registry, for progress rendering.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    fn step(&self, id: &str) -> Result<&StepDescriptor, FlowError> {
        self.registry.go_to(id).ok_or_else(|| FlowError::UnknownStep {
            step: id.to_string(),
        })
    }

    /// Send the reset code and park the email for the OTP step. Returns
    /// the step to navigate to.
    pub async fn request(&self, email: Email) -> Result<&StepDescriptor, FlowError> {
        self.client.auth().forgot_password(&email).await?;
        self.requested.set(PasswordResetHandoff { email });
        self.step("verify-otp")
    }

    /// Render guard for the OTP step: the email the code was sent to, or
    /// a redirect to forgot-password when the handoff is absent.
    pub fn enter_verify(&self) -> Result<Email, FlowError> {
        self.requested
            .peek()
            .map(|h| h.email)
            .ok_or(FlowError::MissingHandoff {
                destination: "/auth/verify-otp",
                fallback: "/auth/forgot-password",
            })
    }

    /// Verify the 4-digit code. Issues exactly one verification call; on
    /// success the verified pair is parked for the final step and the
    /// returned descriptor points at set-new-password.
    pub async fn verify(&self, otp: OtpCode) -> Result<&StepDescriptor, FlowError> {
        let Some(handoff) = self.requested.take() else {
            return Err(FlowError::MissingHandoff {
                destination: "/auth/verify-otp",
                fallback: "/auth/forgot-password",
            });
        };

        if let Err(e) = self.client.auth().verify_otp(&handoff.email, &otp).await {
            // Restore the slot so a failed code or a transient error does
            // not dead-end the flow.
            self.requested.set(handoff);
            return Err(e.into());
        }

        self.verified.set(OtpVerifiedHandoff {
            email: handoff.email,
            otp,
        });
        self.step("set-new-password")
    }

    /// Set the new password. The pair is checked locally first — a
    /// violation makes no network call — then the verified email/OTP is
    /// replayed with the reset request. Success clears all reset state.
    pub async fn complete(&self, new_password: &str, confirmation: &str) -> Result<(), FlowError> {
        if let Err(e) = password_pair(new_password, confirmation) {
            return Err(FlowError::Invalid {
                violations: vec![FieldViolation::new("confirmPassword", e.to_string())],
            });
        }

        let Some(handoff) = self.verified.take() else {
            return Err(FlowError::MissingHandoff {
                destination: "/auth/set-new-password",
                fallback: "/auth/forgot-password",
            });
        };

        if let Err(e) = self
            .client
            .auth()
            .reset_password(&handoff.email, &handoff.otp, new_password)
            .await
        {
            self.verified.set(handoff);
            return Err(e.into());
        }

        self.reset();
        Ok(())
    }

    /// Clear both slots (flow completion or abandonment). A later flow
    /// instance starts from a clean slate.
    pub fn reset(&self) {
        self.requested.clear();
        self.verified.clear();
    }
}

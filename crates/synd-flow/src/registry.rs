//! # Step Registry
//!
//! Static configuration for a wizard flow: an ordered list of named steps,
//! each mapped to a navigable route and a position in the progress
//! sidebar. Defined at flow-construction time, immutable for the session.
//!
//! Lookups are total: an unknown step id or route returns `None` and the
//! caller treats it as a no-op — navigation never panics.

use serde::Serialize;

/// Static metadata for one step in a wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    /// Stable identifier used by flow code.
    pub id: &'static str,
    /// Display name for the progress sidebar.
    pub name: &'static str,
    /// Navigable route for this step.
    pub route: &'static str,
    /// Zero-based position in the flow.
    pub order: usize,
}

/// The ordered sequence of steps for one flow.
#[derive(Debug, Clone)]
pub struct StepRegistry {
    flow: &'static str,
    steps: Vec<StepDescriptor>,
}

impl StepRegistry {
    /// Build a registry from `(id, name, route)` triples; order follows
    /// the slice.
    pub fn new(flow: &'static str, defs: &[(&'static str, &'static str, &'static str)]) -> Self {
        let steps = defs
            .iter()
            .enumerate()
            .map(|(order, &(id, name, route))| StepDescriptor {
                id,
                name,
                route,
                order,
            })
            .collect();
        Self { flow, steps }
    }

    /// The flow this registry belongs to.
    pub fn flow(&self) -> &'static str {
        self.flow
    }

    /// All steps in order.
    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    /// The entry step.
    pub fn first(&self) -> Option<&StepDescriptor> {
        self.steps.first()
    }

    /// Look up a step by id.
    pub fn get(&self, step_id: &str) -> Option<&StepDescriptor> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    /// The step whose route matches the current location, if any.
    pub fn step_for(&self, route: &str) -> Option<&StepDescriptor> {
        self.steps.iter().find(|s| s.route == route)
    }

    /// Resolve a navigation target. An unknown id is a no-op `None`.
    pub fn go_to(&self, step_id: &str) -> Option<&StepDescriptor> {
        self.get(step_id)
    }

    /// The step after `step_id`, or `None` at the end of the flow (or
    /// for an unknown id).
    pub fn next_after(&self, step_id: &str) -> Option<&StepDescriptor> {
        let current = self.get(step_id)?;
        self.steps.get(current.order + 1)
    }
}

/// The investor onboarding flow.
pub fn investor_onboarding() -> StepRegistry {
    StepRegistry::new(
        "investor-onboarding",
        &[
            ("account-type", "Account type", "/onboarding/account-type"),
            (
                "personal-details",
                "Personal details",
                "/onboarding/personal-details",
            ),
            (
                "identity-verification",
                "Identity verification",
                "/onboarding/identity-verification",
            ),
            ("bank-details", "Bank details", "/onboarding/bank-details"),
            ("review", "Review & submit", "/onboarding/review"),
        ],
    )
}

/// The syndicate creation flow.
pub fn syndicate_creation() -> StepRegistry {
    StepRegistry::new(
        "syndicate-creation",
        &[
            (
                "entity-profile",
                "Entity profile",
                "/syndicate/new/entity-profile",
            ),
            ("lead-details", "Lead details", "/syndicate/new/lead-details"),
            ("review", "Review & submit", "/syndicate/new/review"),
        ],
    )
}

/// The SPV creation flow.
pub fn spv_creation() -> StepRegistry {
    StepRegistry::new(
        "spv-creation",
        &[
            ("deal-basics", "Deal basics", "/spv/new/basics"),
            ("terms", "Terms", "/spv/new/terms"),
            ("documents", "Documents", "/spv/new/documents"),
            ("review", "Review & submit", "/spv/new/review"),
        ],
    )
}

/// The password-reset flow.
pub fn password_reset() -> StepRegistry {
    StepRegistry::new(
        "password-reset",
        &[
            (
                "forgot-password",
                "Forgot password",
                "/auth/forgot-password",
            ),
            ("verify-otp", "Verify code", "/auth/verify-otp"),
            (
                "set-new-password",
                "Set new password",
                "/auth/set-new-password",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_follow_definition_sequence() {
        let registry = investor_onboarding();
        let orders: Vec<usize> = registry.steps().iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
        assert_eq!(registry.first().unwrap().id, "account-type");
    }

    #[test]
    fn step_for_matches_route() {
        let registry = investor_onboarding();
        let step = registry.step_for("/onboarding/bank-details").unwrap();
        assert_eq!(step.id, "bank-details");
        assert!(registry.step_for("/nowhere").is_none());
    }

    #[test]
    fn go_to_unknown_id_is_a_noop() {
        let registry = spv_creation();
        assert!(registry.go_to("nonexistent").is_none());
    }

    #[test]
    fn next_after_walks_the_flow_and_ends() {
        let registry = password_reset();
        assert_eq!(
            registry.next_after("forgot-password").unwrap().id,
            "verify-otp"
        );
        assert_eq!(
            registry.next_after("verify-otp").unwrap().id,
            "set-new-password"
        );
        assert!(registry.next_after("set-new-password").is_none());
        assert!(registry.next_after("nonexistent").is_none());
    }
}

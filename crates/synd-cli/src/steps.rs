//! `synd steps` — print a flow's step registry in order.

use anyhow::bail;
use clap::Args;

use synd_flow::registry::{
    investor_onboarding, password_reset, spv_creation, syndicate_creation,
};
use synd_flow::StepRegistry;

/// Arguments for the `steps` subcommand.
#[derive(Args, Debug)]
pub struct StepsArgs {
    /// Flow to print: investor-onboarding, syndicate-creation,
    /// spv-creation, or password-reset.
    flow: String,
}

fn registry_for(flow: &str) -> Option<StepRegistry> {
    match flow {
        "investor-onboarding" => Some(investor_onboarding()),
        "syndicate-creation" => Some(syndicate_creation()),
        "spv-creation" => Some(spv_creation()),
        "password-reset" => Some(password_reset()),
        _ => None,
    }
}

/// Run the `steps` subcommand.
pub fn run_steps(args: StepsArgs) -> anyhow::Result<()> {
    let Some(registry) = registry_for(&args.flow) else {
        bail!(
            "unknown flow \"{}\" (expected one of: investor-onboarding, \
             syndicate-creation, spv-creation, password-reset)",
            args.flow
        );
    };

    println!("{}", registry.flow());
    for step in registry.steps() {
        println!("  {}. {:<24} {}", step.order + 1, step.name, step.route);
    }
    Ok(())
}

//! # synd CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; all backend interaction
//! goes through `synd-client` with configuration from the environment.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use synd_cli::investment::{run_investment, InvestmentArgs};
use synd_cli::profile::{run_profile, ProfileArgs};
use synd_cli::spv::{run_spv, SpvArgs};
use synd_cli::steps::{run_steps, StepsArgs};

/// Syndicate Platform CLI
///
/// Operator tooling for the platform client stack: inspect onboarding
/// drafts, SPVs, and investment requests, finalize applications, and
/// print flow step registries.
#[derive(Parser, Debug)]
#[command(name = "synd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Onboarding profile drafts (show, submit).
    Profile(ProfileArgs),

    /// SPV drafts (list, show).
    Spv(SpvArgs),

    /// Investment requests (list, status refresh).
    Investment(InvestmentArgs),

    /// Print a flow's step registry in order.
    Steps(StepsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("synd CLI starting");

    let result = match cli.command {
        Commands::Profile(args) => run_profile(args).await,
        Commands::Spv(args) => run_spv(args).await,
        Commands::Investment(args) => run_investment(args).await,
        Commands::Steps(args) => run_steps(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

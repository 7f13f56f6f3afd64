//! # synd-cli library
//!
//! Subcommand handlers for the `synd` binary. Each module exposes a
//! `run_*` entry point and its clap argument struct; `main.rs` only
//! parses and dispatches.

pub mod investment;
pub mod profile;
pub mod spv;
pub mod steps;

use anyhow::Context;

use synd_client::{PlatformClient, PlatformConfig};

/// Build an authenticated client from the environment
/// (`SYND_API_URL`, `SYND_API_TOKEN`, `SYND_TIMEOUT_SECS`).
pub(crate) fn client_from_env() -> anyhow::Result<PlatformClient> {
    let config = PlatformConfig::from_env().context("loading platform configuration")?;
    PlatformClient::new(config).context("building platform client")
}

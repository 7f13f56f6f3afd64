//! `synd spv` — inspect SPV drafts.

use clap::{Args, Subcommand};
use uuid::Uuid;

use synd_core::SpvId;

/// Arguments for the `spv` subcommand.
#[derive(Args, Debug)]
pub struct SpvArgs {
    #[command(subcommand)]
    command: SpvCommand,
}

#[derive(Subcommand, Debug)]
enum SpvCommand {
    /// List the caller's SPVs.
    List,
    /// Show one SPV's draft state.
    Show {
        /// SPV id to fetch.
        #[arg(long)]
        id: Uuid,
    },
}

/// Run the `spv` subcommand.
pub async fn run_spv(args: SpvArgs) -> anyhow::Result<()> {
    let client = crate::client_from_env()?;

    match args.command {
        SpvCommand::List => {
            let spvs = client.spv().list().await?;
            if spvs.is_empty() {
                println!("no SPVs");
                return Ok(());
            }
            for record in spvs {
                let status = record
                    .status
                    .map(|s| format!("{s:?}"))
                    .unwrap_or_else(|| "-".to_string());
                println!("{}  {status}", record.id);
            }
        }
        SpvCommand::Show { id } => {
            match client.spv().get(SpvId::from_uuid(id)).await? {
                None => println!("SPV {id} not found"),
                Some(record) => {
                    println!("spv {}", record.id);
                    if let Some(status) = record.status {
                        println!("  status: {status:?}");
                    }
                    for (name, value) in &record.fields {
                        println!("    {name} = {value}");
                    }
                }
            }
        }
    }

    Ok(())
}

//! `synd investment` — inspect investment requests and refresh status.

use clap::{Args, Subcommand};
use uuid::Uuid;

use synd_core::{InvestmentId, SpvId};

/// Arguments for the `investment` subcommand.
#[derive(Args, Debug)]
pub struct InvestmentArgs {
    #[command(subcommand)]
    command: InvestmentCommand,
}

#[derive(Subcommand, Debug)]
enum InvestmentCommand {
    /// List investment requests against an SPV.
    List {
        /// SPV id whose requests to list.
        #[arg(long)]
        spv: Uuid,
    },
    /// Refresh one request's status (manual refresh, no polling).
    Status {
        /// Investment request id.
        #[arg(long)]
        id: Uuid,
    },
}

/// Run the `investment` subcommand.
pub async fn run_investment(args: InvestmentArgs) -> anyhow::Result<()> {
    let client = crate::client_from_env()?;

    match args.command {
        InvestmentCommand::List { spv } => {
            let records = client.investments().list(SpvId::from_uuid(spv)).await?;
            if records.is_empty() {
                println!("no investment requests");
                return Ok(());
            }
            for record in records {
                let amount = record.amount.as_deref().unwrap_or("-");
                let status = record
                    .status
                    .map(|s| format!("{s:?}"))
                    .unwrap_or_else(|| "-".to_string());
                println!("{}  {amount}  {status}", record.id);
            }
        }
        InvestmentCommand::Status { id } => {
            match client
                .investments()
                .get_status(InvestmentId::from_uuid(id))
                .await?
            {
                None => println!("investment {id} not found"),
                Some(record) => {
                    println!("investment {}", record.id);
                    if let Some(amount) = &record.amount {
                        println!("  amount: {amount}");
                    }
                    if let Some(status) = record.status {
                        println!("  status: {status:?}");
                    }
                    if let Some(updated) = record.updated_at {
                        println!("  updated: {updated}");
                    }
                }
            }
        }
    }

    Ok(())
}

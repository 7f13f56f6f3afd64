//! `synd profile` — inspect and finalize onboarding drafts.

use clap::{Args, Subcommand};
use uuid::Uuid;

use synd_core::ProfileId;

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// List the caller's draft profiles with status and populated fields.
    Show,
    /// Finalize an application (terminal submit, empty body).
    Submit {
        /// Profile id to submit.
        #[arg(long)]
        id: Uuid,
    },
}

/// Run the `profile` subcommand.
pub async fn run_profile(args: ProfileArgs) -> anyhow::Result<()> {
    let client = crate::client_from_env()?;

    match args.command {
        ProfileCommand::Show => {
            let profiles = client.profiles().list().await?;
            if profiles.is_empty() {
                println!("no draft profiles (first visit would take the create path)");
                return Ok(());
            }
            for record in profiles {
                println!("profile {}", record.id);
                if let Some(status) = record.status {
                    println!("  status: {status:?}");
                }
                if let Some(updated) = record.updated_at {
                    println!("  updated: {updated}");
                }
                println!("  populated fields: {}", record.fields.len());
                for (name, value) in &record.fields {
                    println!("    {name} = {value}");
                }
            }
        }
        ProfileCommand::Submit { id } => {
            let record = client
                .profiles()
                .submit_application(ProfileId::from_uuid(id))
                .await?;
            println!("submitted profile {}", record.id);
            if let Some(status) = record.status {
                println!("  status: {status:?}");
            }
        }
    }

    Ok(())
}

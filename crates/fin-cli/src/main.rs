//! fin - finboard admin CLI
//!
//! The admin workflow from the command line: list signups, approve or
//! reject them, and delete users.
//!
//! # Examples
//!
//! ```bash
//! # List all users
//! fin --token <jwt> users list --pretty
//!
//! # Approve a pending signup
//! fin --token <jwt> users approve <uuid>
//!
//! # Delete a user and dependent data
//! fin --token <jwt> users delete <uuid>
//! ```

mod cli;
mod commands;
mod user_commands;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::user_commands::UserCommands;

use fin_cli::{CliClientResult, Client};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server, cli.token.as_deref());

    let result = match cli.command {
        Commands::Users { action } => match action {
            UserCommands::List => client.list_users().await,
            // The server answers mutations with the refreshed list, so
            // the output is always server state, never a local patch
            UserCommands::Approve { id } => client.set_approval(&id, "approved").await,
            UserCommands::Reject { id } => client.set_approval(&id, "rejected").await,
            UserCommands::Delete { id } => delete_and_relist(&client, &id).await,
        },
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Delete a user, then fetch the listing again so the output reflects
/// the post-delete server state
async fn delete_and_relist(client: &Client, id: &str) -> CliClientResult<Value> {
    client.delete_user(id).await?;
    client.list_users().await
}

use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User approval and management operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}

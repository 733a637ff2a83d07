use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users, newest signup first
    List,
    /// Approve a pending user
    Approve {
        /// User ID (UUID)
        id: String,
    },
    /// Reject a user
    Reject {
        /// User ID (UUID)
        id: String,
    },
    /// Delete a user and all dependent data
    Delete {
        /// User ID (UUID)
        id: String,
    },
}

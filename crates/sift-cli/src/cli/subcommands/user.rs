use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a user.
    Create {
        username: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Get a user by ID or username.
    Get { id: String },
    /// List users.
    List,
    /// Delete a user.
    Delete { id: String },
}

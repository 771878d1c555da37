use clap::Subcommand;

/// Search session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Record a search session.
    Create {
        review: String,
        #[arg(long, default_value = "")]
        search: String,
        /// Source the search ran against; omit for the generic session.
        #[arg(long)]
        source: Option<String>,
    },
    /// Get a session by ID.
    Get { id: String },
    /// Replace a session's search string.
    Update { id: String, search: String },
    /// Delete a session.
    Delete { id: String },
    /// List a review's sessions.
    List { review: String },
    /// Show the generic session, or a draft when none is stored.
    Generic { review: String },
    /// Store the generic session's search string.
    SaveGeneric { review: String, search: String },
}

use clap::Subcommand;

/// Selection criteria commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CriteriaCommands {
    /// Create a criterion.
    Create {
        review: String,
        /// inclusion | exclusion
        #[arg(long = "type")]
        criteria_type: String,
        description: String,
    },
    /// Get a criterion by ID.
    Get { id: String },
    /// Update a criterion.
    Update {
        id: String,
        #[arg(long = "type")]
        criteria_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a criterion.
    Delete { id: String },
    /// List a review's criteria, grouped by type.
    List { review: String },
}

use clap::Subcommand;

/// Keyword commands.
#[derive(Clone, Debug, Subcommand)]
pub enum KeywordCommands {
    /// Create a keyword.
    Create {
        review: String,
        description: String,
        /// Make this a synonym of another keyword of the review.
        #[arg(long)]
        synonym_of: Option<String>,
    },
    /// Get a keyword by ID.
    Get { id: String },
    /// Update a keyword.
    Update {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "root")]
        synonym_of: Option<String>,
        /// Detach from its root keyword.
        #[arg(long)]
        root: bool,
    },
    /// Delete a keyword.
    Delete { id: String },
    /// List a review's keywords.
    List {
        review: String,
        /// Only root keywords.
        #[arg(long)]
        roots: bool,
    },
    /// List synonyms of a keyword.
    Synonyms { id: String },
}

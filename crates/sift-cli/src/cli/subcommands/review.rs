use clap::Subcommand;

/// Review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Create a review.
    Create {
        #[arg(long)]
        author: String,
        #[arg(long)]
        title: String,
        /// Slug; derived from the title when omitted.
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        objective: String,
    },
    /// Get a review by ID.
    Get { id: String },
    /// List reviews, most recently updated first.
    List {
        /// Only reviews this user authors or co-authors.
        #[arg(long)]
        user: Option<String>,
    },
    /// Update a review.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        objective: Option<String>,
        /// unpublished | published
        #[arg(long)]
        status: Option<String>,
        /// single_form | multiple_forms
        #[arg(long)]
        selection_strategy: Option<String>,
        #[arg(long)]
        quality_strategy: Option<String>,
        #[arg(long)]
        extraction_strategy: Option<String>,
        #[arg(long)]
        cutoff: Option<f64>,
    },
    /// Delete a review and everything it owns.
    Delete { id: String },
    /// Add a co-author.
    AddCoAuthor { id: String, user: String },
    /// Remove a co-author.
    RemoveCoAuthor { id: String, user: String },
    /// List co-authors.
    CoAuthors { id: String },
    /// Attach a source.
    AddSource { id: String, source: String },
    /// Detach a source.
    RemoveSource { id: String, source: String },
    /// List attached sources.
    Sources { id: String },
    /// Check whether a user authors or co-authors the review.
    Access { id: String, user: String },
}

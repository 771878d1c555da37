use clap::Subcommand;

/// Literature source commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SourceCommands {
    /// Create a source.
    Create {
        name: String,
        #[arg(long, default_value = "")]
        url: String,
        /// Offer this source to new reviews.
        #[arg(long = "default")]
        is_default: bool,
    },
    /// Get a source by ID.
    Get { id: String },
    /// Update a source.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long = "default")]
        is_default: Option<bool>,
    },
    /// List sources by name.
    List {
        /// Only default sources.
        #[arg(long)]
        defaults: bool,
    },
    /// Delete a source.
    Delete { id: String },
}

use clap::{Args, Subcommand};

/// Article commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArticleCommands {
    /// Create an article.
    Create {
        review: String,
        #[command(flatten)]
        fields: ArticleFields,
    },
    /// Get an article by ID.
    Get { id: String },
    /// Update an article.
    Update {
        id: String,
        #[command(flatten)]
        fields: ArticleFields,
        /// Clear the source link.
        #[arg(long, conflicts_with = "source")]
        no_source: bool,
    },
    /// Set an article's screening status.
    Status {
        id: String,
        /// unclassified | rejected | accepted
        status: String,
    },
    /// Delete an article.
    Delete { id: String },
    /// List a review's articles.
    List {
        review: String,
        #[arg(long)]
        source: Option<String>,
        /// Only accepted articles.
        #[arg(long, conflicts_with = "source")]
        accepted: bool,
    },
}

/// Bibliographic fields shared by create and update.
#[derive(Clone, Debug, Default, Args)]
pub struct ArticleFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub bibtex_key: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub journal: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub volume: Option<String>,
    #[arg(long)]
    pub pages: Option<String>,
    #[arg(long = "abstract")]
    pub abstract_text: Option<String>,
    #[arg(long)]
    pub document_type: Option<String>,
    #[arg(long)]
    pub keywords: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub session: Option<String>,
}

use clap::Subcommand;

/// Research question commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// Create a question.
    Create {
        review: String,
        #[arg(long)]
        text: String,
        /// main | secondary
        #[arg(long = "type", default_value = "secondary")]
        question_type: String,
        #[arg(long, default_value = "")]
        population: String,
        #[arg(long, default_value = "")]
        intervention: String,
        #[arg(long, default_value = "")]
        comparison: String,
        #[arg(long, default_value = "")]
        outcome: String,
    },
    /// Get a question by ID.
    Get { id: String },
    /// Update a question.
    Update {
        id: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long = "type")]
        question_type: Option<String>,
        #[arg(long)]
        population: Option<String>,
        #[arg(long)]
        intervention: Option<String>,
        #[arg(long)]
        comparison: Option<String>,
        #[arg(long)]
        outcome: Option<String>,
    },
    /// Delete a question.
    Delete { id: String },
    /// List a review's questions.
    List {
        review: String,
        /// Only secondary questions.
        #[arg(long)]
        secondary: bool,
    },
    /// Show the review's main question (null when absent).
    Main { review: String },
}

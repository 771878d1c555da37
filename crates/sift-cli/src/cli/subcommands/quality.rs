use clap::Subcommand;

/// Quality assessment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QualityCommands {
    /// Add a quality question to a review.
    AddQuestion { review: String, description: String },
    /// Reword a quality question.
    UpdateQuestion { id: String, description: String },
    /// Remove a quality question.
    RemoveQuestion { id: String },
    /// List a review's quality questions.
    Questions { review: String },
    /// Add a weighted answer option.
    AddAnswer {
        review: String,
        description: String,
        #[arg(long)]
        weight: f64,
    },
    /// Change an answer option.
    UpdateAnswer {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Remove an answer option.
    RemoveAnswer { id: String },
    /// List a review's answer options, heaviest first.
    Answers { review: String },
    /// Add the suggested Yes / Partially / No answers.
    Seed { review: String },
    /// Answer a quality question for an article.
    Assess {
        article: String,
        question: String,
        #[arg(long)]
        user: String,
        /// Omit to record the assessment unanswered.
        #[arg(long)]
        answer: Option<String>,
    },
    /// List an article's assessments.
    Assessments { article: String },
    /// Remove an assessment.
    RemoveAssessment { id: String },
    /// Show an article's score against its review's maximum and cutoff.
    Score { article: String },
    /// Show the highest score an article can reach in a review.
    MaxScore { review: String },
}

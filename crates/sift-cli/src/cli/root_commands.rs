use clap::Subcommand;

use crate::cli::subcommands::{
    ArticleCommands, CriteriaCommands, ExtractionCommands, KeywordCommands, QualityCommands,
    QuestionCommands, ReviewCommands, SessionCommands, SourceCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Users referenced by reviews.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Literature sources.
    Source {
        #[command(subcommand)]
        action: SourceCommands,
    },
    /// Reviews, co-authors and attached sources.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Research questions.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Inclusion and exclusion criteria.
    Criteria {
        #[command(subcommand)]
        action: CriteriaCommands,
    },
    /// Search keywords and synonyms.
    Keyword {
        #[command(subcommand)]
        action: KeywordCommands,
    },
    /// Search sessions.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Articles and screening.
    Article {
        #[command(subcommand)]
        action: ArticleCommands,
    },
    /// Quality assessment.
    Quality {
        #[command(subcommand)]
        action: QualityCommands,
    },
    /// Data extraction.
    Extraction {
        #[command(subcommand)]
        action: ExtractionCommands,
    },
}

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sift` binary.
#[derive(Debug, Parser)]
#[command(name = "sift", version, about = "Sift - systematic literature review store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Result encoding
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Cap on rows returned by list commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log store activity at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `store.path`)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Copy the global flags out for handlers, which outlive the parsed command.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{ArticleCommands, QualityCommands, ReviewCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "sift",
            "--format",
            "raw",
            "--limit",
            "10",
            "--verbose",
            "review",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Review {
                action: ReviewCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sift", "review", "get", "rev-00000001", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sift", "--format", "xml", "review", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn db_override_is_carried() {
        let cli = Cli::try_parse_from(["sift", "--db", ":memory:", "user", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some(":memory:"));
    }

    #[test]
    fn article_status_takes_positional_label() {
        let cli = Cli::try_parse_from(["sift", "article", "status", "art-00000001", "accepted"])
            .expect("cli should parse");
        match cli.command {
            Commands::Article {
                action: ArticleCommands::Status { id, status },
            } => {
                assert_eq!(id, "art-00000001");
                assert_eq!(status, "accepted");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn assess_requires_user() {
        let missing = Cli::try_parse_from([
            "sift",
            "quality",
            "assess",
            "art-00000001",
            "qqu-00000001",
        ]);
        assert!(missing.is_err());

        let cli = Cli::try_parse_from([
            "sift",
            "quality",
            "assess",
            "art-00000001",
            "qqu-00000001",
            "--user",
            "usr-00000001",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Quality {
                action: QualityCommands::Assess { answer: None, .. }
            }
        ));
    }
}

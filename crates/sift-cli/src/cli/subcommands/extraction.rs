use clap::Subcommand;

/// Data extraction commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExtractionCommands {
    /// Add an extraction field to a review.
    AddField {
        review: String,
        description: String,
        /// boolean | string | float | integer | date | select_one | select_many
        #[arg(long = "type")]
        field_type: String,
    },
    /// Change an extraction field.
    UpdateField {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "type")]
        field_type: Option<String>,
    },
    /// Remove an extraction field.
    RemoveField { id: String },
    /// List a review's extraction fields.
    Fields { review: String },
    /// Add a permitted value to a select field.
    AddValue { field: String, value: String },
    /// Rename a permitted value.
    UpdateValue { id: String, value: String },
    /// Remove a permitted value.
    RemoveValue { id: String },
    /// List a field's permitted values.
    Values { field: String },
    /// Record a field value for an article.
    Record {
        article: String,
        field: String,
        #[arg(long)]
        user: String,
        #[arg(long, default_value = "")]
        value: String,
        /// Chosen lookup IDs for select fields (repeatable).
        #[arg(long = "select")]
        selections: Vec<String>,
    },
    /// Replace the free-text value of an extraction.
    SetValue { id: String, value: String },
    /// Replace the chosen values of an extraction.
    Select { id: String, lookups: Vec<String> },
    /// List an article's extractions.
    Show { article: String },
    /// Remove an extraction.
    Delete { id: String },
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A search keyword. Keywords with no `synonym_of` are canonical; the ones
/// pointing at a canonical keyword are its synonyms.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Keyword {
    pub id: String,
    pub review_id: String,
    /// At most 200 characters once stored.
    pub description: String,
    pub synonym_of: Option<String>,
}

impl Keyword {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.synonym_of.is_none()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

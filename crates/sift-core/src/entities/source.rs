use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::normalize_source_url;

/// A literature database or registry (IEEE Xplore, Scopus, ...).
///
/// Sources are shared: reviews reference them but do not own them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub url: String,
    pub is_default: bool,
}

impl Source {
    /// Store `value` as the URL, normalized (see [`normalize_source_url`]).
    pub fn set_url(&mut self, value: &str) {
        self.url = normalize_source_url(value);
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Source {
        Source {
            id: "src-00000001".into(),
            name: "Scopus".into(),
            url: String::new(),
            is_default: false,
        }
    }

    #[test]
    fn set_url_prefixes_bare_host() {
        let mut s = source();
        s.set_url("www.scopus.com");
        assert_eq!(s.url, "http://www.scopus.com");
    }

    #[test]
    fn set_url_keeps_empty_and_schemed() {
        let mut s = source();
        s.set_url("");
        assert_eq!(s.url, "");
        s.set_url("https://www.scopus.com");
        assert_eq!(s.url, "https://www.scopus.com");
    }
}

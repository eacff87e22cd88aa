//! Free-text search predicate.

use docshelf_entity::document::DocumentRecord;

/// Lower-cased, whitespace-separated search tokens.
///
/// A record matches when *every* token is a substring of its file name or
/// of any of its tag names (each token independently). No tokens means
/// every record matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    tokens: Vec<String>,
}

impl SearchTerms {
    /// Split `input` on whitespace and lower-case each token.
    pub fn parse(input: &str) -> Self {
        Self {
            tokens: input.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Whether there is nothing to filter on.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The parsed tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Apply the AND-across-tokens predicate to a record.
    pub fn matches(&self, record: &DocumentRecord) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let file_name = record.file_name.to_lowercase();
        let tag_names: Vec<String> = record.tags.iter().map(|t| t.name.to_lowercase()).collect();

        self.tokens.iter().all(|token| {
            file_name.contains(token.as_str())
                || tag_names.iter().any(|name| name.contains(token.as_str()))
        })
    }
}

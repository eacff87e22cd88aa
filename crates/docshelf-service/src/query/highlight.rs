//! Search-term highlighting for file names.

use serde::{Deserialize, Serialize};

use super::search::SearchTerms;

/// A run of text that either matched a search token or did not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSegment {
    /// The text of this run, in its original casing.
    pub text: String,
    /// Whether the run matched a search token.
    pub matched: bool,
}

impl HighlightSegment {
    fn new(text: String, matched: bool) -> Self {
        Self { text, matched }
    }
}

/// Split `text` into alternating matched / unmatched segments.
///
/// Tokens come from [`SearchTerms::parse`], so matching is
/// case-insensitive and overlapping or adjacent hits collapse into one
/// segment. A blank search yields the whole text as a single unmatched
/// segment; empty text yields no segments.
pub fn highlight(text: &str, search: &str) -> Vec<HighlightSegment> {
    let terms = SearchTerms::parse(search);
    if text.is_empty() {
        return Vec::new();
    }
    if terms.is_empty() {
        return vec![HighlightSegment::new(text.to_string(), false)];
    }

    let chars: Vec<char> = text.chars().collect();
    let lowered = fold_per_char(text, &chars);

    let mut marks = vec![false; chars.len()];
    for token in terms.tokens() {
        for start in 0..chars.len() {
            if let Some(end) = match_at(&lowered, start, token) {
                marks[start..end].iter_mut().for_each(|m| *m = true);
            }
        }
    }

    let mut segments: Vec<HighlightSegment> = Vec::new();
    for (c, matched) in chars.into_iter().zip(marks) {
        match segments.last_mut() {
            Some(last) if last.matched == matched => last.text.push(c),
            _ => segments.push(HighlightSegment::new(c.to_string(), matched)),
        }
    }
    segments
}

/// Lower-case `text` as a whole (as search matching does) and split the
/// result back into one piece per original char.
///
/// Whole-string lower-casing is context sensitive (a word-final `Σ` becomes
/// `ς`), but never changes how many chars each original char expands to.
fn fold_per_char(text: &str, chars: &[char]) -> Vec<String> {
    let folded = text.to_lowercase();
    let mut folded_chars = folded.chars();
    chars
        .iter()
        .map(|c| folded_chars.by_ref().take(c.to_lowercase().count()).collect())
        .collect()
}

/// End index (exclusive) if `token` matches the lowered chars starting at `start`.
fn match_at(lowered: &[String], start: usize, token: &str) -> Option<usize> {
    let mut acc = String::new();
    for (offset, piece) in lowered[start..].iter().enumerate() {
        acc.push_str(piece);
        if acc == token {
            return Some(start + offset + 1);
        }
        if !token.starts_with(acc.as_str()) {
            return None;
        }
    }
    None
}

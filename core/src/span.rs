//! Match spans produced by a single search call.
//!
//! Positions and lengths count `char`s of the NFC-normalized text that was
//! searched. They are only meaningful against that exact string; callers
//! re-search whenever the displayed text changes.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::utils;

/// Strategy that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    Direct,
    Sandhi,
    PratikaGrahana,
    Exact,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Direct => "direct",
            MatchType::Sandhi => "sandhi",
            MatchType::PratikaGrahana => "pratika-grahana",
            MatchType::Exact => "exact",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text surrounding a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContext {
    pub before: String,
    #[serde(rename = "match")]
    pub match_text: String,
    pub after: String,
    pub full: String,
}

impl MatchContext {
    /// Build the context of `length` chars at `position`, padded with up to
    /// `radius` chars on each side.
    pub fn around(chars: &[char], position: usize, length: usize, radius: usize) -> Self {
        let end = (position + length).min(chars.len());
        let position = position.min(end);
        let start = position.saturating_sub(radius);
        let stop = (end + radius).min(chars.len());
        let collect = |r: Range<usize>| chars[r].iter().collect::<String>();
        Self {
            before: collect(start..position),
            match_text: collect(position..end),
            after: collect(end..stop),
            full: collect(start..stop),
        }
    }
}

/// One highlighted region of a searched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSpan {
    pub position: usize,
    pub length: usize,
    pub matched_text: String,
    pub context: MatchContext,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pratika_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandhi_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl MatchSpan {
    pub fn new(
        chars: &[char],
        position: usize,
        length: usize,
        match_type: MatchType,
        context_length: usize,
    ) -> Self {
        let context = MatchContext::around(chars, position, length, context_length);
        Self {
            position,
            length,
            matched_text: context.match_text.clone(),
            context,
            match_type,
            pratika_pattern: None,
            sandhi_rule: None,
            original_term: None,
            variant: None,
        }
    }

    /// Char offset one past the last matched char.
    pub fn end(&self) -> usize {
        self.position + self.length
    }

    /// Byte range of this span within `text`, if it fits.
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        let start = utils::char_to_byte(text, self.position)?;
        let end = utils::char_to_byte(text, self.end())?;
        Some(start..end)
    }

    pub fn overlaps(&self, other: &MatchSpan) -> bool {
        self.position < other.end() && other.position < self.end()
    }

    /// Same region (position and length), regardless of strategy.
    pub fn same_span(&self, other: &MatchSpan) -> bool {
        self.position == other.position && self.length == other.length
    }
}

/// Result of one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub matches: Vec<MatchSpan>,
    pub count: usize,
    #[serde(default)]
    pub search_term: String,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_term(term: &str) -> Self {
        Self {
            search_term: term.to_string(),
            ..Self::default()
        }
    }

    /// Add `span` unless a match with the same position and length exists.
    pub fn push_unique(&mut self, span: MatchSpan) -> bool {
        if self.matches.iter().any(|m| m.same_span(&span)) {
            return false;
        }
        self.matches.push(span);
        true
    }

    /// Add `span` unless a match already starts at the same position.
    pub fn push_unique_position(&mut self, span: MatchSpan) -> bool {
        if self.matches.iter().any(|m| m.position == span.position) {
            return false;
        }
        self.matches.push(span);
        true
    }

    /// Sort by position, keep at most `max_results` (0 keeps all), recount.
    pub fn finalize(&mut self, max_results: usize) {
        self.matches.sort_by_key(|m| m.position);
        if max_results > 0 {
            self.matches.truncate(max_results);
        }
        self.count = self.matches.len();
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn context_is_clamped() {
        let text = chars("abcdefghij");
        let ctx = MatchContext::around(&text, 1, 2, 3);
        assert_eq!(ctx.before, "a");
        assert_eq!(ctx.match_text, "bc");
        assert_eq!(ctx.after, "def");
        assert_eq!(ctx.full, "abcdef");
    }

    #[test]
    fn dedup_and_finalize() {
        let text = chars("राम राम");
        let mut results = SearchResults::for_term("राम");
        assert!(results.push_unique(MatchSpan::new(&text, 4, 3, MatchType::Direct, 5)));
        assert!(results.push_unique(MatchSpan::new(&text, 0, 3, MatchType::Direct, 5)));
        assert!(!results.push_unique(MatchSpan::new(&text, 0, 3, MatchType::Sandhi, 5)));
        assert!(results.push_unique(MatchSpan::new(&text, 0, 2, MatchType::Sandhi, 5)));
        results.finalize(2);
        assert_eq!(results.count, 2);
        assert_eq!(results.matches[0].position, 0);
    }

    #[test]
    fn byte_range_maps_char_offsets() {
        let text = "अ राम";
        let span = MatchSpan::new(&chars(text), 2, 3, MatchType::Direct, 0);
        let range = span.byte_range(text).unwrap();
        assert_eq!(&text[range], "राम");
    }

    #[test]
    fn serializes_type_tag() {
        let span = MatchSpan::new(&chars("x"), 0, 1, MatchType::PratikaGrahana, 0);
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json["type"], "pratika-grahana");
        assert_eq!(json["matchedText"], "x");
        assert!(json.get("sandhiRule").is_none());
    }
}

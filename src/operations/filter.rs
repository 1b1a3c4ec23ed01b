//! Whole-word filtering of parsed entries

use crate::error::InventoryError;
use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Second search term used when the caller supplies only one
pub const DEFAULT_SECOND_TERM: &str = "servers";

/// Keys containing this substring are never reported
const EXCLUDED_KEY_FRAGMENT: &str = "data";

/// One key/value pair selected for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// The two terms an entry must both contain as whole words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    pub first: String,
    pub second: String,
}

impl SearchTerms {
    /// Build search terms, defaulting the second one to `servers`
    #[inline]
    pub fn new<S: Into<String>>(first: S, second: Option<String>) -> Self {
        Self {
            first: first.into(),
            second: second.unwrap_or_else(|| DEFAULT_SECOND_TERM.to_owned()),
        }
    }
}

/// Matches a literal term only at word boundaries
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Regex,
}

impl WordMatcher {
    /// Compile a matcher for `term`; regex metacharacters in it are taken literally
    ///
    /// Word characters are ASCII `[0-9A-Za-z_]` only.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The escaped pattern exceeds the regex engine's size limits
    #[inline]
    pub fn new(term: &str) -> Result<Self> {
        let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(term));
        let regex = Regex::new(&pattern).map_err(|err| {
            InventoryError::usage(format!("Invalid search term '{term}': {err}"))
        })?;
        Ok(Self { regex })
    }

    /// True when the term appears as a whole word in `text`
    #[must_use]
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// True when the term appears as a whole word in the key or in the value
    #[must_use]
    #[inline]
    pub fn matches_entry(&self, key: &str, value: &str) -> bool {
        self.is_match(key) || self.is_match(value)
    }
}

/// Nested or templated data is never reported
fn is_malformed(key: &str, value: &str) -> bool {
    [key, value]
        .iter()
        .any(|text| text.contains('{') || text.contains('}'))
}

/// Select the entries matching both search terms
///
/// Entries whose key or value contains a brace, and entries whose key
/// contains `data`, are excluded before matching. Results follow the map's
/// key order.
///
/// # Errors
///
/// Returns an error if:
/// - A term cannot be compiled into a matcher
#[inline]
pub fn filter_entries(entries: &BTreeMap<String, String>, terms: &SearchTerms) -> Result<Vec<Entry>> {
    let first = WordMatcher::new(&terms.first)?;
    let second = WordMatcher::new(&terms.second)?;

    let matches: Vec<Entry> = entries
        .iter()
        .filter(|(key, value)| !is_malformed(key, value))
        .filter(|(key, _)| !key.contains(EXCLUDED_KEY_FRAGMENT))
        .filter(|(key, value)| first.matches_entry(key, value) && second.matches_entry(key, value))
        .map(|(key, value)| Entry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();

    debug!(
        "{} of {} entries matched '{}' and '{}'",
        matches.len(),
        entries.len(),
        terms.first,
        terms.second
    );

    Ok(matches)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn second_term_defaults_to_servers() {
        let terms = SearchTerms::new("west", None);
        assert_eq!(terms.second, "servers");
    }

    #[test]
    fn matcher_requires_word_boundaries() {
        let matcher = WordMatcher::new("server").unwrap();
        assert!(matcher.is_match("the server runs"));
        assert!(matcher.is_match("server"));
        assert!(!matcher.is_match("servers2"));
        assert!(!matcher.is_match("webserver"));
    }

    #[test]
    fn matcher_uses_ascii_word_boundaries() {
        let cafe = WordMatcher::new("café").unwrap();
        assert!(!cafe.is_match("café bar"));

        let na = WordMatcher::new("na").unwrap();
        assert!(na.is_match("naïve"));
    }

    #[test]
    fn matcher_treats_metacharacters_literally() {
        let matcher = WordMatcher::new("a.b").unwrap();
        assert!(matcher.is_match("host a.b up"));
        assert!(!matcher.is_match("host axb up"));
    }
}

//! Keyword and phrase lists that drive urgency decisions.

use super::KeywordConfigError;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Immutable keyword configuration shared by every classification.
///
/// Entries are stored exactly as configured. Descriptions and categories are
/// lowercased before lookup, so only lowercase entries can ever match them.
///
/// # Examples
///
/// ```
/// use task_urgency::classification::domain::KeywordConfig;
///
/// let keywords = KeywordConfig::new()
///     .with_urgency_keywords(["asap", "urgent"])
///     .with_negative_keywords(["not"]);
/// assert!(keywords.is_urgency_keyword("asap"));
/// assert!(!keywords.is_urgency_keyword("ASAP"));
/// assert!(keywords.is_negative_keyword("not"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordConfig {
    negative_keywords: BTreeSet<String>,
    urgency_keywords: BTreeSet<String>,
    urgency_phrases: BTreeSet<String>,
    non_urgency_keywords: BTreeSet<String>,
    non_urgency_phrases: BTreeSet<String>,
}

/// On-disk layout of the keyword document.
#[derive(Debug, Deserialize)]
struct KeywordDocument {
    negative_keywords: Vec<String>,
    urgency_keywords: Vec<String>,
    urgency_phrases: Vec<String>,
    non_urgency_keywords: Vec<String>,
    non_urgency_phrases: Vec<String>,
}

impl KeywordConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a keyword document with the five list-valued keys
    /// `negative_keywords`, `urgency_keywords`, `urgency_phrases`,
    /// `non_urgency_keywords` and `non_urgency_phrases`.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordConfigError::Parse`] when the document is malformed or
    /// a list is missing.
    pub fn from_json_str(json: &str) -> Result<Self, KeywordConfigError> {
        let document: KeywordDocument = serde_json::from_str(json)?;
        Ok(Self::new()
            .with_negative_keywords(document.negative_keywords)
            .with_urgency_keywords(document.urgency_keywords)
            .with_urgency_phrases(document.urgency_phrases)
            .with_non_urgency_keywords(document.non_urgency_keywords)
            .with_non_urgency_phrases(document.non_urgency_phrases))
    }

    /// Sets lemmas that negate an urgency keyword when found beside it.
    #[must_use]
    pub fn with_negative_keywords(
        mut self,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.negative_keywords = collect_entries(entries);
        self
    }

    /// Sets lemmas that signal urgency.
    #[must_use]
    pub fn with_urgency_keywords(
        mut self,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.urgency_keywords = collect_entries(entries);
        self
    }

    /// Sets phrases that signal urgency.
    #[must_use]
    pub fn with_urgency_phrases(
        mut self,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.urgency_phrases = collect_entries(entries);
        self
    }

    /// Sets lemmas that force a normal verdict.
    #[must_use]
    pub fn with_non_urgency_keywords(
        mut self,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.non_urgency_keywords = collect_entries(entries);
        self
    }

    /// Sets phrases that force a normal verdict wherever they occur.
    #[must_use]
    pub fn with_non_urgency_phrases(
        mut self,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.non_urgency_phrases = collect_entries(entries);
        self
    }

    /// Names the lists holding an entry made only of whitespace.
    ///
    /// Such entries are kept, but an empty non-urgency phrase matches every
    /// description, so loaders report them.
    #[must_use]
    pub fn lists_with_blank_entries(&self) -> Vec<&'static str> {
        [
            ("negative_keywords", &self.negative_keywords),
            ("urgency_keywords", &self.urgency_keywords),
            ("urgency_phrases", &self.urgency_phrases),
            ("non_urgency_keywords", &self.non_urgency_keywords),
            ("non_urgency_phrases", &self.non_urgency_phrases),
        ]
        .into_iter()
        .filter(|(_, entries)| entries.iter().any(|entry| entry.trim().is_empty()))
        .map(|(list, _)| list)
        .collect()
    }

    /// Returns `true` when `lemma` negates an urgency keyword.
    #[must_use]
    pub fn is_negative_keyword(&self, lemma: &str) -> bool {
        self.negative_keywords.contains(lemma)
    }

    /// Returns `true` when `lemma` signals urgency.
    #[must_use]
    pub fn is_urgency_keyword(&self, lemma: &str) -> bool {
        self.urgency_keywords.contains(lemma)
    }

    /// Returns `true` when `lemma` forces a normal verdict.
    #[must_use]
    pub fn is_non_urgency_keyword(&self, lemma: &str) -> bool {
        self.non_urgency_keywords.contains(lemma)
    }

    /// Returns `true` when `phrase` is exactly one of the urgency phrases.
    #[must_use]
    pub fn is_urgency_phrase(&self, phrase: &str) -> bool {
        self.urgency_phrases.contains(phrase)
    }

    /// Returns the first urgency phrase contained in `text`, if any.
    #[must_use]
    pub fn urgency_phrase_in(&self, text: &str) -> Option<&str> {
        find_phrase(&self.urgency_phrases, text)
    }

    /// Returns the first non-urgency phrase contained in `text`, if any.
    #[must_use]
    pub fn non_urgency_phrase_in(&self, text: &str) -> Option<&str> {
        find_phrase(&self.non_urgency_phrases, text)
    }

    /// Returns the negative keywords.
    #[must_use]
    pub const fn negative_keywords(&self) -> &BTreeSet<String> {
        &self.negative_keywords
    }

    /// Returns the urgency keywords.
    #[must_use]
    pub const fn urgency_keywords(&self) -> &BTreeSet<String> {
        &self.urgency_keywords
    }

    /// Returns the urgency phrases.
    #[must_use]
    pub const fn urgency_phrases(&self) -> &BTreeSet<String> {
        &self.urgency_phrases
    }

    /// Returns the non-urgency keywords.
    #[must_use]
    pub const fn non_urgency_keywords(&self) -> &BTreeSet<String> {
        &self.non_urgency_keywords
    }

    /// Returns the non-urgency phrases.
    #[must_use]
    pub const fn non_urgency_phrases(&self) -> &BTreeSet<String> {
        &self.non_urgency_phrases
    }
}

fn collect_entries(entries: impl IntoIterator<Item = impl Into<String>>) -> BTreeSet<String> {
    entries.into_iter().map(Into::into).collect()
}

fn find_phrase<'a>(phrases: &'a BTreeSet<String>, text: &str) -> Option<&'a str> {
    phrases
        .iter()
        .find(|phrase| text.contains(phrase.as_str()))
        .map(String::as_str)
}

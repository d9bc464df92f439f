//! Annotated text produced by a text annotator.
//!
//! Tokens live in an arena and refer to their syntactic head by index. A
//! root token is its own head; the children of a token are every other token
//! whose head is that token.

use super::AnnotationError;
use std::fmt;

/// Single token with its lemma and syntactic head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    lemma: String,
    head: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, head: usize) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            head,
        }
    }

    /// Returns the surface text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the lemma.
    #[must_use]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Returns the index of the head token.
    #[must_use]
    pub const fn head(&self) -> usize {
        self.head
    }
}

/// Semantic category of a named entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// Calendar dates and relative days (`DATE`).
    Date,
    /// Times of day and short durations (`TIME`).
    Time,
    /// Any other label reported by the annotator.
    Other(String),
}

impl EntityLabel {
    /// Returns the canonical upper-case label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Other(label) => label,
        }
    }

    /// Returns `true` for `DATE` and `TIME`.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time)
    }
}

impl From<&str> for EntityLabel {
    fn from(label: &str) -> Self {
        match label {
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named entity span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    text: String,
    label: EntityLabel,
}

impl Entity {
    /// Creates an entity.
    #[must_use]
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    /// Returns the surface text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the entity label.
    #[must_use]
    pub const fn label(&self) -> &EntityLabel {
        &self.label
    }
}

/// Text with tokens, dependency links and named entities.
///
/// # Examples
///
/// ```
/// use task_urgency::classification::domain::{AnnotatedText, Token};
///
/// let annotated = AnnotatedText::new(
///     "do not need it",
///     vec![
///         Token::new("do", "do", 2),
///         Token::new("not", "not", 2),
///         Token::new("need", "need", 2),
///         Token::new("it", "it", 2),
///     ],
///     Vec::new(),
/// )
/// .expect("heads are in range");
///
/// let children: Vec<&str> = annotated.children_of(2).map(|t| t.lemma()).collect();
/// assert_eq!(children, ["do", "not", "it"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedText {
    text: String,
    tokens: Vec<Token>,
    entities: Vec<Entity>,
}

impl AnnotatedText {
    /// Creates an annotated text after checking every head index.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::HeadOutOfRange`] when a token refers to a
    /// head beyond the token list.
    pub fn new(
        text: impl Into<String>,
        tokens: Vec<Token>,
        entities: Vec<Entity>,
    ) -> Result<Self, AnnotationError> {
        let len = tokens.len();
        if let Some((token, head)) = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (index, token.head))
            .find(|(_, head)| *head >= len)
        {
            return Err(AnnotationError::HeadOutOfRange { token, head, len });
        }
        Ok(Self {
            text: text.into(),
            tokens,
            entities,
        })
    }

    /// Returns the normalised text the annotation was produced from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tokens in text order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the named entities.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the head of the token at `index`.
    #[must_use]
    pub fn head_of(&self, index: usize) -> Option<&Token> {
        self.tokens
            .get(index)
            .and_then(|token| self.tokens.get(token.head))
    }

    /// Iterates over the dependents of the token at `index`, in text order.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(position, token)| *position != index && token.head == index)
            .map(|(_, token)| token)
    }

    /// Returns `true` when any entity is labelled `DATE` or `TIME`.
    #[must_use]
    pub fn has_temporal_entity(&self) -> bool {
        self.entities.iter().any(|entity| entity.label.is_temporal())
    }
}

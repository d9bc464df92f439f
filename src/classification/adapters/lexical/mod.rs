//! Built-in rule-based English annotator.
//!
//! Provides lemmas, clause-level dependency links and `DATE`/`TIME` entities
//! without loading a statistical language model. Any richer engine can take
//! its place behind [`TextAnnotator`].

mod clauses;
mod entities;
mod lemma;
mod tokenizer;

use crate::classification::{
    domain::{AnnotatedText, Token},
    ports::{AnnotatorError, AnnotatorResult, TextAnnotator},
};
use entities::EntityRecognizer;

/// Rule-based annotator for lowercased English text.
///
/// # Examples
///
/// ```
/// use task_urgency::classification::adapters::lexical::LexicalAnnotator;
/// use task_urgency::classification::ports::TextAnnotator;
///
/// let annotator = LexicalAnnotator::new().expect("patterns compile");
/// let annotated = annotator.annotate("don't rush").expect("annotation succeeds");
/// let lemmas: Vec<&str> = annotated.tokens().iter().map(|t| t.lemma()).collect();
/// assert_eq!(lemmas, ["do", "not", "rush"]);
/// ```
#[derive(Debug, Clone)]
pub struct LexicalAnnotator {
    recognizer: EntityRecognizer,
}

impl LexicalAnnotator {
    /// Compiles the entity patterns.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotatorError::Engine`] when a pattern fails to compile.
    pub fn new() -> AnnotatorResult<Self> {
        let recognizer = EntityRecognizer::new().map_err(AnnotatorError::engine)?;
        Ok(Self { recognizer })
    }
}

impl TextAnnotator for LexicalAnnotator {
    fn annotate(&self, text: &str) -> AnnotatorResult<AnnotatedText> {
        let words = tokenizer::tokenize(text);
        let lemmas: Vec<String> = words
            .iter()
            .map(|word| lemma::lemmatize(&word.to_lowercase()))
            .collect();
        let heads = clauses::attach_heads(&lemmas);
        let tokens = words
            .into_iter()
            .zip(lemmas)
            .zip(heads)
            .map(|((word, lemma), head)| Token::new(word, lemma, head))
            .collect();
        let entities = self.recognizer.recognize(text);
        Ok(AnnotatedText::new(text, tokens, entities)?)
    }
}

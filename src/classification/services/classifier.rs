//! Service layer for rule-based urgency classification.

use crate::classification::{
    domain::{
        AnnotatedText, Decision, DueDate, DueDateError, FallbackSignal, KeywordConfig, TaskRecord,
        Urgency,
    },
    ports::{AnnotatorError, TextAnnotator},
};
use mockable::Clock;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// How urgency phrases are matched during the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PhraseMatching {
    /// Each character of the text is looked up as a phrase on its own, so
    /// only single-character phrases can ever match. Keeps verdicts
    /// compatible with existing deployments.
    #[default]
    PerCharacter,
    /// Any urgency phrase contained in the text matches.
    Substring,
}

impl PhraseMatching {
    /// Returns the configuration spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerCharacter => "per-character",
            Self::Substring => "substring",
        }
    }
}

impl fmt::Display for PhraseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a phrase matching mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown phrase matching mode '{0}', expected per-character or substring")]
pub struct ParsePhraseMatchingError(pub String);

impl FromStr for PhraseMatching {
    type Err = ParsePhraseMatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-character" => Ok(Self::PerCharacter),
            "substring" => Ok(Self::Substring),
            _ => Err(ParsePhraseMatchingError(s.to_owned())),
        }
    }
}

/// Service-level errors for urgency classification.
#[derive(Debug, Error)]
pub enum UrgencyError {
    /// A task field needed by the decision is absent.
    #[error("task field '{0}' is required")]
    MissingField(&'static str),
    /// The due date could not be parsed.
    #[error(transparent)]
    MalformedDueDate(#[from] DueDateError),
    /// The annotator failed.
    #[error(transparent)]
    Annotation(#[from] AnnotatorError),
}

/// Result type for urgency classification.
pub type UrgencyResult<T> = Result<T, UrgencyError>;

/// Rule-based urgency classifier.
///
/// Rules are evaluated in order and the first that applies decides:
///
/// 1. a non-urgency phrase anywhere in the description gives `normal`;
/// 2. scanning tokens left to right, a non-urgency keyword gives `normal`,
///    and the first urgency keyword gives `urgent` unless a child of its
///    head token is a negative keyword, in which case it gives `normal`;
/// 3. otherwise the task is `urgent` when an urgency phrase matches, the
///    text mentions a date or time, the category is an urgency keyword, or
///    the due date is less than a day away.
pub struct UrgencyClassifier<A, C>
where
    A: TextAnnotator,
    C: Clock + Send + Sync,
{
    keywords: Arc<KeywordConfig>,
    annotator: Arc<A>,
    clock: Arc<C>,
    phrase_matching: PhraseMatching,
}

impl<A, C> UrgencyClassifier<A, C>
where
    A: TextAnnotator,
    C: Clock + Send + Sync,
{
    /// Creates a classifier with per-character phrase matching.
    #[must_use]
    pub const fn new(keywords: Arc<KeywordConfig>, annotator: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            keywords,
            annotator,
            clock,
            phrase_matching: PhraseMatching::PerCharacter,
        }
    }

    /// Selects how urgency phrases are matched.
    #[must_use]
    pub fn with_phrase_matching(mut self, phrase_matching: PhraseMatching) -> Self {
        self.phrase_matching = phrase_matching;
        self
    }

    /// Returns the keyword configuration.
    #[must_use]
    pub fn keywords(&self) -> &KeywordConfig {
        &self.keywords
    }

    /// Returns the phrase matching mode.
    #[must_use]
    pub const fn phrase_matching(&self) -> PhraseMatching {
        self.phrase_matching
    }

    /// Classifies a task.
    ///
    /// # Errors
    ///
    /// See [`UrgencyClassifier::explain`].
    pub fn classify(&self, task: &TaskRecord) -> UrgencyResult<Urgency> {
        self.explain(task).map(|decision| decision.urgency())
    }

    /// Classifies a task and reports which rule decided it.
    ///
    /// # Errors
    ///
    /// Returns [`UrgencyError::MissingField`] when the description is absent,
    /// or when the due date or category is absent and the fallback needs it;
    /// [`UrgencyError::MalformedDueDate`] when the fallback cannot parse the
    /// due date; and [`UrgencyError::Annotation`] when the annotator fails.
    pub fn explain(&self, task: &TaskRecord) -> UrgencyResult<Decision> {
        let description = task
            .description()
            .ok_or(UrgencyError::MissingField("description"))?;
        let annotated = self.annotator.annotate(&description.to_lowercase())?;

        let decision = if let Some(phrase) = self.keywords.non_urgency_phrase_in(annotated.text())
        {
            Decision::NonUrgencyPhrase {
                phrase: phrase.to_owned(),
            }
        } else if let Some(decision) = self.scan_tokens(&annotated) {
            decision
        } else {
            Decision::Fallback {
                signal: self.fallback_signal(task, &annotated)?,
            }
        };

        debug!(
            description,
            due_date = ?task.due_date(),
            category = ?task.category(),
            decision = ?decision,
            urgency = %decision.urgency(),
            "classified task"
        );
        Ok(decision)
    }

    fn scan_tokens(&self, annotated: &AnnotatedText) -> Option<Decision> {
        for token in annotated.tokens() {
            let lemma = token.lemma();
            if self.keywords.is_non_urgency_keyword(lemma) {
                return Some(Decision::NonUrgencyKeyword {
                    lemma: lemma.to_owned(),
                });
            }
            if self.keywords.is_urgency_keyword(lemma) {
                let negated_by = annotated
                    .children_of(token.head())
                    .find(|child| self.keywords.is_negative_keyword(child.lemma()))
                    .map(|child| child.lemma().to_owned());
                return Some(Decision::UrgencyKeyword {
                    lemma: lemma.to_owned(),
                    negated_by,
                });
            }
        }
        None
    }

    fn fallback_signal(
        &self,
        task: &TaskRecord,
        annotated: &AnnotatedText,
    ) -> UrgencyResult<Option<FallbackSignal>> {
        let raw_due_date = task
            .due_date()
            .ok_or(UrgencyError::MissingField("dueDate"))?;
        let due_date = DueDate::parse(raw_due_date)?;

        if self.matches_urgency_phrase(annotated.text()) {
            return Ok(Some(FallbackSignal::UrgencyPhrase));
        }
        if annotated.has_temporal_entity() {
            return Ok(Some(FallbackSignal::TemporalEntity));
        }
        let category = task
            .category()
            .ok_or(UrgencyError::MissingField("category"))?;
        if self.keywords.is_urgency_keyword(&category.to_lowercase()) {
            return Ok(Some(FallbackSignal::UrgentCategory));
        }
        let now = self.clock.local().naive_local();
        Ok(due_date
            .is_within_a_day_of(now)
            .then_some(FallbackSignal::DueWithinDay))
    }

    fn matches_urgency_phrase(&self, text: &str) -> bool {
        match self.phrase_matching {
            PhraseMatching::PerCharacter => {
                let mut buffer = [0; 4];
                text.chars()
                    .any(|ch| self.keywords.is_urgency_phrase(ch.encode_utf8(&mut buffer)))
            }
            PhraseMatching::Substring => self.keywords.urgency_phrase_in(text).is_some(),
        }
    }
}

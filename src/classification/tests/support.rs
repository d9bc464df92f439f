//! Shared fixtures for classification tests.

use crate::classification::domain::{AnnotatedText, KeywordConfig, Token};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Freezes the clock at the current instant.
    pub fn now() -> Self {
        Self(Local::now())
    }

    /// Formats `now + offset` the way task due dates arrive.
    pub fn due_in(&self, offset: TimeDelta) -> String {
        (self.0.naive_local() + offset)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

#[fixture]
pub fn clock() -> FixedClock {
    FixedClock::now()
}

#[fixture]
pub fn keywords() -> KeywordConfig {
    KeywordConfig::new()
        .with_negative_keywords(["not", "no", "never"])
        .with_urgency_keywords(["asap", "urgent", "immediately", "critical"])
        .with_urgency_phrases(["as soon as possible", "right away"])
        .with_non_urgency_keywords(["whenever", "someday"])
        .with_non_urgency_phrases(["no rush", "take your time"])
}

/// Builds an annotation from `(text, lemma, head)` triples.
pub fn annotation(text: &str, tokens: &[(&str, &str, usize)]) -> AnnotatedText {
    let built = tokens
        .iter()
        .map(|(word, lemma, head)| Token::new(*word, *lemma, *head))
        .collect();
    AnnotatedText::new(text, built, Vec::new()).expect("test annotation heads are in range")
}

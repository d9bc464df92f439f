//! Pattern-based recognition of `DATE` and `TIME` entities.

use crate::classification::domain::{Entity, EntityLabel};
use regex::Regex;

const DATE_PATTERNS: &[&str] = &[
    r"\b(?:today|tomorrow|yesterday)\b",
    r"\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)s?\b",
    r"\b(?:next|this|last|coming)\s+(?:week|month|year|weekend|quarter)\b",
    r"\bend\s+of\s+(?:the\s+)?(?:day|week|month|year|quarter)\b",
    r"\b(?:january|february|march|april|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)(?:\s+\d{1,2}(?:st|nd|rd|th)?)?\b",
    r"\bmay\s+\d{1,2}(?:st|nd|rd|th)?\b",
    r"\b\d{1,2}(?:st|nd|rd|th)\b",
    r"\b\d{4}-\d{1,2}-\d{1,2}\b",
    r"\b\d{1,2}/\d{1,2}(?:/\d{2,4})?\b",
];

const TIME_PATTERNS: &[&str] = &[
    r"\b(?:tonight|noon|midday|midnight)\b",
    r"\bthis\s+(?:morning|afternoon|evening)\b",
    r"\b\d{1,2}(?::\d{2})?\s*(?:am|pm|a\.m\.|p\.m\.)",
    r"\b\d{1,2}:\d{2}\b",
    r"\bin\s+(?:\d+|an?|a\s+few|few)\s+(?:minutes?|hours?)\b",
];

/// Compiled entity patterns.
#[derive(Debug, Clone)]
pub(super) struct EntityRecognizer {
    patterns: Vec<(Regex, EntityLabel)>,
}

struct Span {
    start: usize,
    end: usize,
    entity: Entity,
}

impl EntityRecognizer {
    /// Compiles every pattern.
    pub(super) fn new() -> Result<Self, regex::Error> {
        let dates = DATE_PATTERNS.iter().map(|pattern| (pattern, EntityLabel::Date));
        let times = TIME_PATTERNS.iter().map(|pattern| (pattern, EntityLabel::Time));
        let patterns = dates
            .chain(times)
            .map(|(pattern, label)| Regex::new(pattern).map(|regex| (regex, label)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Finds non-overlapping entities, preferring the earliest then longest
    /// match.
    pub(super) fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut spans: Vec<Span> = self
            .patterns
            .iter()
            .flat_map(|(pattern, label)| {
                pattern.find_iter(text).map(|found| Span {
                    start: found.start(),
                    end: found.end(),
                    entity: Entity::new(found.as_str().trim(), label.clone()),
                })
            })
            .collect();
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut entities = Vec::new();
        let mut covered_until = 0;
        for span in spans {
            if span.start < covered_until {
                continue;
            }
            covered_until = span.end;
            entities.push(span.entity);
        }
        entities
    }
}

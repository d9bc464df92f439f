//! Urgency verdicts and the rule that produced them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency level assigned to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// The task needs attention soon.
    Urgent,
    /// The task can wait.
    Normal,
}

impl Urgency {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback condition that marked a task urgent.
///
/// Conditions are evaluated in declaration order and the first one that
/// holds is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackSignal {
    /// The text matched an urgency phrase.
    UrgencyPhrase,
    /// The text mentions a date or time.
    TemporalEntity,
    /// The category is itself an urgency keyword.
    UrgentCategory,
    /// The due date is less than a day away, or already past.
    DueWithinDay,
}

/// Rule that decided a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A non-urgency phrase occurs in the description.
    NonUrgencyPhrase {
        /// The matched phrase.
        phrase: String,
    },
    /// A token lemma is a non-urgency keyword.
    NonUrgencyKeyword {
        /// The matched lemma.
        lemma: String,
    },
    /// A token lemma is an urgency keyword.
    UrgencyKeyword {
        /// The matched lemma.
        lemma: String,
        /// Negating lemma found among the head's children, if any.
        negated_by: Option<String>,
    },
    /// No keyword matched; due date, entities and category decided.
    Fallback {
        /// The first fallback condition that held, if any.
        signal: Option<FallbackSignal>,
    },
}

impl Decision {
    /// Returns the urgency implied by this decision.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        match self {
            Self::UrgencyKeyword {
                negated_by: None, ..
            }
            | Self::Fallback { signal: Some(_) } => Urgency::Urgent,
            Self::NonUrgencyPhrase { .. }
            | Self::NonUrgencyKeyword { .. }
            | Self::UrgencyKeyword { .. }
            | Self::Fallback { signal: None } => Urgency::Normal,
        }
    }
}

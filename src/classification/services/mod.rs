//! Application services for urgency classification.

mod classifier;

pub use classifier::{
    ParsePhraseMatchingError, PhraseMatching, UrgencyClassifier, UrgencyError, UrgencyResult,
};

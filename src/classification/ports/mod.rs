//! Port contracts for urgency classification.
//!
//! Ports define infrastructure-agnostic interfaces used by the classifier.

pub mod annotator;

pub use annotator::{AnnotatorError, AnnotatorResult, TextAnnotator};

#[cfg(test)]
pub use annotator::MockTextAnnotator;

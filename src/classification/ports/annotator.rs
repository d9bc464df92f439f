//! Annotator port for tokenisation, lemmatisation, dependency links and
//! named-entity recognition.

use crate::classification::domain::{AnnotatedText, AnnotationError};
use std::sync::Arc;
use thiserror::Error;

/// Result type for annotator operations.
pub type AnnotatorResult<T> = Result<T, AnnotatorError>;

/// Language analysis capability used by the classifier.
///
/// Implementations are loaded once and shared read-only across requests, so
/// they must be thread-safe.
#[cfg_attr(test, mockall::automock)]
pub trait TextAnnotator: Send + Sync {
    /// Annotates already-lowercased text.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotatorError`] when the engine fails or produces an
    /// inconsistent annotation.
    fn annotate(&self, text: &str) -> AnnotatorResult<AnnotatedText>;
}

/// Errors returned by annotator implementations.
#[derive(Debug, Clone, Error)]
pub enum AnnotatorError {
    /// Engine-level failure.
    #[error("annotation engine failed: {0}")]
    Engine(Arc<dyn std::error::Error + Send + Sync>),

    /// The engine produced dependency links that do not resolve.
    #[error(transparent)]
    InvalidAnnotation(#[from] AnnotationError),
}

impl AnnotatorError {
    /// Wraps an engine error.
    #[must_use]
    pub fn engine(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Engine(Arc::new(err))
    }
}

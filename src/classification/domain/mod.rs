//! Domain model for urgency classification.
//!
//! Task records, keyword lists, annotated text and verdicts. Nothing here
//! touches the filesystem, the network or a language model.

mod annotation;
mod due_date;
mod error;
mod keywords;
mod task;
mod verdict;

pub use annotation::{AnnotatedText, Entity, EntityLabel, Token};
pub use due_date::DueDate;
pub use error::{AnnotationError, DueDateError, KeywordConfigError};
pub use keywords::KeywordConfig;
pub use task::TaskRecord;
pub use verdict::{Decision, FallbackSignal, Urgency};

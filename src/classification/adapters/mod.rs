//! Adapter implementations for urgency classification.

pub mod keyword_file;
pub mod lexical;

pub use keyword_file::load_keyword_config;
pub use lexical::LexicalAnnotator;

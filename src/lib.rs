//! Task urgency: rule-based urgency classification for task descriptions.
//!
//! This crate decides whether a task is `urgent` or `normal` from its
//! description, due date and category, and serves that decision over HTTP.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure classification values with no infrastructure dependencies
//! - **Ports**: The text annotation capability the classifier depends on
//! - **Adapters**: A rule-based English annotator and the keyword file loader
//!
//! # Modules
//!
//! - [`classification`]: Keyword configuration, annotation and the classifier
//! - [`config`]: Environment-driven service configuration
//! - [`http`]: The axum router exposing the classifier

pub mod classification;
pub mod config;
pub mod http;

//! Unit tests for urgency classification.

mod domain_tests;
mod support;

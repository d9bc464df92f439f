//! Urgency classification of task descriptions.
//!
//! Decides whether a task is `urgent` or `normal` from its description, due
//! date and category, using keyword lists, negation found through dependency
//! links, date and time mentions, and due-date proximity. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The classifier in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

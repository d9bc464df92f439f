//! Step definitions for urgency classification scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

//! Shared world state for urgency classification BDD scenarios.

use chrono::{Local, TimeDelta};
use rstest::fixture;
use task_urgency::classification::{
    domain::{KeywordConfig, TaskRecord, Urgency},
    services::{PhraseMatching, UrgencyError},
};

/// Keyword file shipped with the service.
pub const SHIPPED_KEYWORDS: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/priority_system_keywords.json"
);

/// Scenario world for urgency classification behaviour tests.
#[derive(Default)]
pub struct UrgencyWorld {
    pub keywords: KeywordConfig,
    pub phrase_matching: PhraseMatching,
    pub task: TaskRecord,
    pub result: Option<Result<Urgency, UrgencyError>>,
}

impl UrgencyWorld {
    /// Replaces the pending task with an updated copy.
    pub fn update_task(&mut self, update: impl FnOnce(TaskRecord) -> TaskRecord) {
        self.task = update(std::mem::take(&mut self.task));
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> UrgencyWorld {
    UrgencyWorld::default()
}

/// Formats a due date `offset` from now the way the task API receives it.
pub fn due_in(offset: TimeDelta) -> String {
    (Local::now().naive_local() + offset)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

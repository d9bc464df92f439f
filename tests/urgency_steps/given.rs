//! Given steps for urgency classification BDD scenarios.

use super::world::{SHIPPED_KEYWORDS, UrgencyWorld, due_in};
use camino::Utf8Path;
use chrono::TimeDelta;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use task_urgency::classification::{
    adapters::load_keyword_config, domain::TaskRecord, services::PhraseMatching,
};

#[given("the default keyword configuration")]
fn default_keywords(world: &mut UrgencyWorld) -> Result<(), eyre::Report> {
    world.keywords = load_keyword_config(Utf8Path::new(SHIPPED_KEYWORDS))
        .wrap_err("load shipped keyword configuration")?;
    Ok(())
}

#[given("substring phrase matching")]
fn substring_phrase_matching(world: &mut UrgencyWorld) {
    world.phrase_matching = PhraseMatching::Substring;
}

#[given(r#"a task described as "{description}""#)]
fn task_described_as(world: &mut UrgencyWorld, description: String) {
    world.task = TaskRecord::new(description);
}

#[given("the task is due in {days:u64} days")]
fn due_in_days(world: &mut UrgencyWorld, days: u64) -> Result<(), eyre::Report> {
    let offset = i64::try_from(days).wrap_err("day offset fits in i64")?;
    world.update_task(|task| task.with_due_date(due_in(TimeDelta::days(offset))));
    Ok(())
}

#[given("the task is due in {hours:u64} hours")]
fn due_in_hours(world: &mut UrgencyWorld, hours: u64) -> Result<(), eyre::Report> {
    let offset = i64::try_from(hours).wrap_err("hour offset fits in i64")?;
    world.update_task(|task| task.with_due_date(due_in(TimeDelta::hours(offset))));
    Ok(())
}

#[given(r#"the raw due date "{raw}""#)]
fn raw_due_date(world: &mut UrgencyWorld, raw: String) {
    world.update_task(|task| task.with_due_date(raw));
}

#[given(r#"the task category is "{category}""#)]
fn task_category(world: &mut UrgencyWorld, category: String) {
    world.update_task(|task| task.with_category(category));
}

//! When steps for urgency classification BDD scenarios.

use super::world::UrgencyWorld;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use std::sync::Arc;
use task_urgency::classification::{adapters::LexicalAnnotator, services::UrgencyClassifier};

#[when("the task is classified")]
fn classify_task(world: &mut UrgencyWorld) -> Result<(), eyre::Report> {
    let annotator = LexicalAnnotator::new().wrap_err("build lexical annotator")?;
    let classifier = UrgencyClassifier::new(
        Arc::new(world.keywords.clone()),
        Arc::new(annotator),
        Arc::new(DefaultClock),
    )
    .with_phrase_matching(world.phrase_matching);

    world.result = Some(classifier.classify(&world.task));
    Ok(())
}

//! Then steps for urgency classification BDD scenarios.

use super::world::UrgencyWorld;
use rstest_bdd_macros::then;
use task_urgency::classification::services::UrgencyError;

#[then(r#"the urgency is "{expected}""#)]
fn urgency_is(world: &UrgencyWorld, expected: String) -> Result<(), eyre::Report> {
    let result = world
        .result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing classification result in scenario world"))?;
    let urgency = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected classification failure: {err}"))?;

    if urgency.as_str() != expected {
        return Err(eyre::eyre!("expected {expected} urgency, found {urgency}"));
    }
    Ok(())
}

#[then("classification fails with a malformed due date error")]
fn malformed_due_date_error(world: &UrgencyWorld) -> Result<(), eyre::Report> {
    let result = world
        .result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing classification result in scenario world"))?;

    if !matches!(result, Err(UrgencyError::MalformedDueDate(_))) {
        return Err(eyre::eyre!(
            "expected malformed due date error, got {result:?}"
        ));
    }
    Ok(())
}

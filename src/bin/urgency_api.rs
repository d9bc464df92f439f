//! Serves the urgency classifier over HTTP.
//!
//! Usage:
//!
//! ```text
//! URGENCY_KEYWORDS_PATH=config/priority_system_keywords.json urgency_api
//! ```
//!
//! The keyword file must be a JSON object with the list-valued keys
//! `negative_keywords`, `urgency_keywords`, `urgency_phrases`,
//! `non_urgency_keywords` and `non_urgency_phrases`. A missing or malformed
//! file stops the process before it binds its listener. A request looks like:
//!
//! ```json
//! {
//!   "description": "Please submit the report asap",
//!   "dueDate": "2024-05-01T10:30:00",
//!   "category": "work"
//! }
//! ```

use mockable::DefaultClock;
use std::sync::Arc;
use task_urgency::classification::adapters::{LexicalAnnotator, load_keyword_config};
use task_urgency::classification::services::UrgencyClassifier;
use task_urgency::config::ServiceConfig;
use task_urgency::http::router;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing();
    if let Err(err) = run().await {
        error!(error = %err, "urgency service stopped");
        return Err(err);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), BoxError> {
    let config = ServiceConfig::from_env()?;
    let keywords = load_keyword_config(config.keywords_path())?;
    info!(
        path = %config.keywords_path(),
        urgency_keywords = keywords.urgency_keywords().len(),
        non_urgency_phrases = keywords.non_urgency_phrases().len(),
        "loaded keyword configuration"
    );

    let classifier = UrgencyClassifier::new(
        Arc::new(keywords),
        Arc::new(LexicalAnnotator::new()?),
        Arc::new(DefaultClock),
    )
    .with_phrase_matching(config.phrase_matching());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = %config.bind_addr(),
        phrase_matching = %config.phrase_matching(),
        "urgency service listening"
    );
    axum::serve(listener, router(Arc::new(classifier))).await?;
    Ok(())
}

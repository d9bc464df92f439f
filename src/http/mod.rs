//! HTTP boundary for the urgency classifier.
//!
//! `POST /` accepts `{"description", "dueDate", "category"}` and answers
//! `{"urgency": "urgent" | "normal"}`. `GET /health` reports liveness.

mod error;

pub use error::ApiError;

use crate::classification::{
    domain::{TaskRecord, Urgency},
    ports::TextAnnotator,
    services::UrgencyClassifier,
};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response body of the classification endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyResponse {
    /// Assigned urgency.
    pub urgency: Urgency,
}

/// Response body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: String,
}

/// Builds the service router around a shared classifier.
pub fn router<A, C>(classifier: Arc<UrgencyClassifier<A, C>>) -> Router
where
    A: TextAnnotator + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(classify_task::<A, C>))
        .route("/health", get(health_check))
        .with_state(classifier)
}

/// Classifies one task on the blocking pool.
async fn classify_task<A, C>(
    State(classifier): State<Arc<UrgencyClassifier<A, C>>>,
    Json(task): Json<TaskRecord>,
) -> Result<Json<UrgencyResponse>, ApiError>
where
    A: TextAnnotator + 'static,
    C: Clock + Send + Sync + 'static,
{
    let urgency = tokio::task::spawn_blocking(move || classifier.classify(&task)).await??;
    Ok(Json(UrgencyResponse { urgency }))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
    })
}

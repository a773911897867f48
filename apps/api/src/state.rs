use std::sync::Arc;

use sqlx::SqlitePool;

use crate::scoring::intent::IntentClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Intent backend. `LlmIntentClassifier` when an API key is configured,
    /// otherwise `UnconfiguredClassifier`.
    pub classifier: Arc<dyn IntentClassifier>,
}

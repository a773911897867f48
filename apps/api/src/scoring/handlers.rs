use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::scoring::orchestrator::score_all_leads;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub message: String,
    pub scored: usize,
    /// Leads that fell back to the `"Error"` intent.
    pub ai_failures: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// POST /score
///
/// Scores every uploaded lead against the current offer and commits the
/// results at once. 400 if no offer has been set.
pub async fn handle_score(State(state): State<AppState>) -> Result<Json<ScoreResponse>, AppError> {
    let summary = score_all_leads(&state.db, state.classifier.as_ref()).await?;

    if summary.scored == 0 {
        return Ok(Json(ScoreResponse {
            message: "No leads found to score.".to_string(),
            scored: 0,
            ai_failures: 0,
            note: None,
        }));
    }

    Ok(Json(ScoreResponse {
        message: format!("Successfully scored {} leads.", summary.scored),
        scored: summary.scored,
        ai_failures: summary.ai_failures,
        note: Some(
            "Scores are a combination of rule-based logic and AI analysis.".to_string(),
        ),
    }))
}

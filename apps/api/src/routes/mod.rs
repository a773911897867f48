pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::leads::handlers::{handle_results, handle_upload_leads};
use crate::offer::handlers::handle_set_offer;
use crate::scoring::handlers::handle_score;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/offer", post(handle_set_offer))
        .route("/leads/upload", post(handle_upload_leads))
        .route("/score", post(handle_score))
        .route("/results", get(handle_results))
        .with_state(state)
}

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::offer::{NewOffer, Offer};
use crate::offer::store::replace_offer;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub message: String,
    pub offer: Offer,
}

/// POST /offer
///
/// Replaces the singleton offer. Any body that does not carry all of
/// `name`, `value_props` and `ideal_use_cases` is a 400.
pub async fn handle_set_offer(
    State(state): State<AppState>,
    payload: Result<Json<NewOffer>, JsonRejection>,
) -> Result<(StatusCode, Json<OfferResponse>), AppError> {
    let Json(new_offer) = payload.map_err(|rejection| {
        AppError::Validation(format!(
            "Invalid or incomplete offer data provided. {}",
            rejection.body_text()
        ))
    })?;

    let offer = replace_offer(&state.db, new_offer).await?;

    Ok((
        StatusCode::CREATED,
        Json(OfferResponse {
            message: "Offer details have been set successfully.".to_string(),
            offer,
        }),
    ))
}

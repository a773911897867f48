use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::leads::csv_import::parse_leads_csv;
use crate::leads::store::{list_leads, replace_leads};
use crate::models::lead::Lead;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub uploaded: u64,
}

struct UploadedFile {
    file_name: Option<String>,
    body: Bytes,
}

/// POST /leads/upload
///
/// Expects a multipart body with the CSV in the `file` part. Validation
/// happens before the store is touched, so a rejected upload keeps the
/// previous batch.
pub async fn handle_upload_leads(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let multipart = multipart.map_err(|rejection| {
        AppError::Validation(format!(
            "No file part in the request. {}",
            rejection.body_text()
        ))
    })?;

    let file = find_file_part(multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file part in the request.".to_string()))?;

    let file_name = file
        .file_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("No file selected.".to_string()))?;
    if !file_name.to_lowercase().ends_with(".csv") {
        return Err(AppError::Validation(format!(
            "Invalid file type for '{file_name}'. Please upload a .csv file."
        )));
    }

    let new_leads =
        parse_leads_csv(&file.body).map_err(|e| AppError::Validation(e.to_string()))?;
    let uploaded = replace_leads(&state.db, &new_leads).await?;

    info!("Uploaded {uploaded} leads from '{file_name}'");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: format!("{uploaded} leads have been uploaded and are ready for scoring."),
            uploaded,
        }),
    ))
}

/// Drains the multipart stream and returns the first `file` part.
async fn find_file_part(mut multipart: Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(String::from);
        let body = field.bytes().await?;
        return Ok(Some(UploadedFile { file_name, body }));
    }
    Ok(None)
}

/// GET /results
pub async fn handle_results(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, AppError> {
    Ok(Json(list_leads(&state.db).await?))
}

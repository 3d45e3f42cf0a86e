//! Axum route handler for the resume upload endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::DocumentFormat;
use crate::resume::models::ResumePayload;
use crate::resume::pipeline::parse_document;
use crate::state::AppState;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

#[derive(Debug)]
struct Upload {
    filename: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

/// POST /parse_resume
///
/// Accepts a `.pdf` or `.docx` upload in the `file` field and returns the
/// heuristic parse in the fixed `ResumePayload` shape.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumePayload>, AppError> {
    let request_id = Uuid::new_v4();

    let upload = read_upload(&mut multipart).await?;

    let filename = upload
        .filename
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation("Missing filename".to_string()))?;
    if upload.bytes.is_empty() {
        return Err(AppError::Validation("Empty file".to_string()));
    }

    let format = DocumentFormat::detect(&filename, upload.content_type.as_deref())?;
    info!(
        %request_id,
        filename = %filename,
        content_type = upload.content_type.as_deref().unwrap_or("-"),
        bytes = upload.bytes.len(),
        format = format.as_str(),
        "Parsing resume upload"
    );

    let options = state.parse_options;
    let bytes = upload.bytes;
    let payload = tokio::task::spawn_blocking(move || parse_document(format, &bytes, options))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;

    info!(
        %request_id,
        skills = payload.skills.len(),
        has_email = !payload.basics.email.is_empty(),
        has_phone = !payload.basics.phone.is_empty(),
        "Resume parsed"
    );
    Ok(Json(payload))
}

/// Reads the first `file` field; other fields are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        return Ok(Upload {
            filename,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation("Missing file".to_string()))
}

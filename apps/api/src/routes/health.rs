use axum::{extract::State, Json};
use serde::Serialize;

use crate::extraction::DocumentFormat;
use crate::resume::models::PARSE_NOTE;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Marker the upload endpoint puts in `note`, so clients can check compatibility up front.
    pub parser: &'static str,
    pub accepted_formats: [&'static str; 2],
    pub max_upload_bytes: usize,
    pub skills_legacy_bullets: bool,
}

/// GET /health
/// Reports liveness plus the upload limits and parser version the service runs with.
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "resume-api",
        version: env!("CARGO_PKG_VERSION"),
        parser: PARSE_NOTE,
        accepted_formats: [DocumentFormat::Pdf.as_str(), DocumentFormat::Docx.as_str()],
        max_upload_bytes: state.config.max_upload_bytes,
        skills_legacy_bullets: state.parse_options.skills.legacy_bullets,
    })
}

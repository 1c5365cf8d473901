//! Axum route handlers for the inbox scan/import API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::pipeline::import_emails;
use crate::models::email::EmailSimulation;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub emails: Vec<EmailSimulation>,
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub emails: Vec<EmailSimulation>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub created: usize,
}

/// POST /api/v1/inbox/scan
///
/// The candidate batch from the mail source, for user review before import.
pub async fn handle_scan(State(state): State<AppState>) -> Json<ScanResponse> {
    let emails = state.inbox.fetch().await;
    Json(ScanResponse { emails })
}

/// POST /api/v1/inbox/import
///
/// Runs the pipeline over the supplied emails, or over the source's current
/// batch when the body is omitted. Responds with the created count only;
/// per-email skips are logged, not reported.
pub async fn handle_import(
    State(state): State<AppState>,
    body: Option<Json<ImportRequest>>,
) -> Result<Json<ImportResponse>, AppError> {
    let emails = match body {
        Some(Json(request)) => request.emails,
        None => state.inbox.fetch().await,
    };

    let created = import_emails(state.extractor.as_ref(), &emails, &state.board).await?;
    info!("imported {created} of {} scanned emails", emails.len());

    Ok(Json(ImportResponse { created }))
}

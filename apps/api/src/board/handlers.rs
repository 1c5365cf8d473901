//! Axum route handlers for the board API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobApplication, JobStatus};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AddJobRequest {
    pub company: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: JobStatus,
}

/// GET /api/v1/jobs
///
/// The current board, most-recent-first.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobApplication>> {
    let board = state.board.read().await;
    Json(board.jobs().to_vec())
}

/// POST /api/v1/jobs
///
/// Manual add. Body is optional; missing fields fall back to placeholder
/// values the user edits afterwards.
pub async fn handle_add_job(
    State(state): State<AppState>,
    body: Option<Json<AddJobRequest>>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let job = JobApplication::manual(
        request.company.unwrap_or_else(|| "New Company".to_string()),
        request.title.unwrap_or_else(|| "New Position".to_string()),
    );

    let mut board = state.board.write().await;
    board.add(job.clone())?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /api/v1/jobs/:id/status
///
/// Direct status set. Transitions are not restricted to next/previous here;
/// the store accepts any enumerated status.
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<JobApplication>, AppError> {
    let mut board = state.board.write().await;
    if !board.update_status(id, request.status) {
        return Err(AppError::NotFound(format!("no job with id {id}")));
    }
    let job = board
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no job with id {id}")))?;
    Ok(Json(job))
}

/// POST /api/v1/jobs/:id/advance
///
/// Moves the record one column forward along the status order.
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobApplication>, AppError> {
    step(&state, id, JobStatus::next, "already at the last stage").await
}

/// POST /api/v1/jobs/:id/revert
///
/// Moves the record one column back along the status order.
pub async fn handle_revert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobApplication>, AppError> {
    step(&state, id, JobStatus::previous, "already at the first stage").await
}

async fn step(
    state: &AppState,
    id: Uuid,
    transition: fn(JobStatus) -> Option<JobStatus>,
    boundary_message: &str,
) -> Result<Json<JobApplication>, AppError> {
    let mut board = state.board.write().await;
    let current = board
        .get(id)
        .map(|job| job.status)
        .ok_or_else(|| AppError::NotFound(format!("no job with id {id}")))?;
    let target =
        transition(current).ok_or_else(|| AppError::Validation(boundary_message.to_string()))?;

    board.update_status(id, target);
    let job = board
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no job with id {id}")))?;
    Ok(Json(job))
}

/// DELETE /api/v1/jobs/:id
///
/// Deleting an unknown id is a no-op, not an error: the UI only issues deletes
/// from buttons bound to records it just listed.
pub async fn handle_delete_job(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    let mut board = state.board.write().await;
    board.delete(id);
    StatusCode::NO_CONTENT
}

//! Axum route handler for the advice API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::advice::career_advice;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
}

/// POST /api/v1/jobs/:id/advice
///
/// The board lock is released before the remote call, so an in-flight import
/// batch and an advice request never block each other.
pub async fn handle_advice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdviceResponse>, AppError> {
    let job = {
        let board = state.board.read().await;
        board
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no job with id {id}")))?
    };

    let advice = career_advice(&state.llm, &job).await;
    Ok(Json(AdviceResponse { advice }))
}

//! Aggregate counts over the board, consumed by the insights view. Chart
//! drawing stays client-side; the API owns the numbers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::job::{JobApplication, JobSource, JobStatus};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: JobStatus,
    pub label: &'static str,
    pub tone: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SourceCount {
    pub source: JobSource,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub total: usize,
    pub interviews: usize,
    pub offers: usize,
    pub by_status: Vec<StatusCount>,
    pub by_source: Vec<SourceCount>,
}

pub fn summarize(jobs: &[JobApplication]) -> BoardSummary {
    let count_status =
        |status: JobStatus| jobs.iter().filter(|job| job.status == status).count();

    let by_status = JobStatus::ORDER
        .into_iter()
        .map(|status| StatusCount {
            status,
            label: status.label(),
            tone: status.tone(),
            count: count_status(status),
        })
        .collect();

    let by_source = [JobSource::GmailAuto, JobSource::Manual, JobSource::LinkedinImport]
        .into_iter()
        .map(|source| SourceCount {
            source,
            count: jobs.iter().filter(|job| job.source == source).count(),
        })
        .collect();

    BoardSummary {
        total: jobs.len(),
        interviews: count_status(JobStatus::Interview),
        offers: count_status(JobStatus::Offer),
        by_status,
        by_source,
    }
}

/// GET /api/v1/analytics/summary
pub async fn handle_summary(State(state): State<AppState>) -> Json<BoardSummary> {
    let board = state.board.read().await;
    Json(summarize(board.jobs()))
}
